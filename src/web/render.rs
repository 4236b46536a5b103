// src/web/render.rs
//! HTML for each view state. Pure functions of the view-controllers.

use rocket::http::RawStr;
use std::borrow::Cow;
use std::fmt::Write;

use crate::core::filters::{EMPLOYMENT_TYPES, SALARY_RANGES};
use crate::core::{FilterSelection, Projection};
use crate::types::{JobDetail, JobDetailPage, JobSummary, ProfileSummary, SimilarJob, Skill};
use crate::views::{JobDetailView, JobListView, ProfileView};

const FAILURE_IMG: &str = "https://assets.ccbp.in/frontend/react-js/failure-img.png";
const NO_JOBS_IMG: &str = "https://assets.ccbp.in/frontend/react-js/no-jobs-img.png";

fn esc(text: &str) -> Cow<'_, str> {
    RawStr::new(text).html_escape()
}

fn enc(text: &str) -> Cow<'_, str> {
    match RawStr::new(text).percent_encode() {
        Cow::Borrowed(raw) => Cow::Borrowed(raw.as_str()),
        Cow::Owned(buf) => Cow::Owned(buf.into_string()),
    }
}

/// Link to the jobs page for a selection. Same parameter shape as the API.
pub fn jobs_href(filters: &FilterSelection) -> String {
    let query = filters.to_query();
    format!(
        "/jobs?employment_type={}&minimum_package={}&search={}",
        enc(&query.employment_type),
        enc(&query.minimum_package),
        enc(&query.search)
    )
}

pub fn job_href(id: &str) -> String {
    format!("/jobs/{}", enc(id))
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav class="header"><a class="header-link" href="/jobs">Jobs</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = esc(title),
        body = body
    )
}

fn loader() -> String {
    r#"<div class="loader-container" data-testid="loader">Loading...</div>"#.to_string()
}

fn failure_view(retry_href: &str) -> String {
    format!(
        r#"<div class="failure-view">
<img src="{img}" alt="failure view" class="failure-image">
<h1 class="failure-heading">Oops! Something Went Wrong</h1>
<p class="failure-text">We cannot seem to find the page you are looking for.</p>
<a class="retry-button" href="{href}">Retry</a>
</div>"#,
        img = FAILURE_IMG,
        href = esc(retry_href)
    )
}

// ===== Jobs page =====

pub fn jobs_page(profile: &ProfileView, jobs: &JobListView) -> String {
    let retry_href = jobs_href(jobs.filters());

    let profile_section = match profile.project() {
        Projection::Loading => loader(),
        Projection::Data(summary) => profile_card(summary),
        Projection::Failure => format!(
            r#"<div class="profile-failure"><a class="retry-button" href="{}">Retry</a></div>"#,
            esc(&retry_href)
        ),
    };

    let jobs_section = match jobs.project() {
        Projection::Loading => loader(),
        Projection::Data(list) => job_list(list),
        Projection::Failure => failure_view(&retry_href),
    };

    let body = format!(
        r#"<div class="jobs-container">
<aside class="side-panel">
<section class="profile-section">{profile}</section>
<hr>
{filters}
</aside>
<section class="jobs-section">
{search}
{jobs}
</section>
</div>"#,
        profile = profile_section,
        filters = filter_panel(jobs.filters()),
        search = search_bar(jobs.filters()),
        jobs = jobs_section
    );

    page("Jobs", &body)
}

fn profile_card(profile: &ProfileSummary) -> String {
    format!(
        r#"<div class="profile-card">
<img src="{img}" alt="profile" class="profile-image">
<h1 class="profile-name">{name}</h1>
<p class="profile-bio">{bio}</p>
</div>"#,
        img = esc(&profile.profile_image_url),
        name = esc(&profile.name),
        bio = esc(&profile.short_bio)
    )
}

fn filter_panel(filters: &FilterSelection) -> String {
    let mut html = String::from(
        "<section class=\"filters\">\n<h1 class=\"filter-heading\">Type of Employment</h1>\n<ul class=\"employment-types\">\n",
    );
    for option in EMPLOYMENT_TYPES {
        let checked = filters.is_employment_type_selected(option.id);
        let href = jobs_href(&filters.with_employment_type_toggled(option.id));
        let _ = writeln!(
            html,
            r#"<li><a class="filter-option" href="{href}"><input type="checkbox" id="{id}" value="{id}"{checked}> {label}</a></li>"#,
            href = esc(&href),
            id = option.id,
            checked = if checked { " checked" } else { "" },
            label = option.label
        );
    }
    html.push_str("</ul>\n<hr>\n<h1 class=\"filter-heading\">Salary Range</h1>\n<ul class=\"salary-ranges\">\n");
    for option in SALARY_RANGES {
        let checked = filters.minimum_package() == Some(option.id);
        let href = jobs_href(&filters.with_minimum_package(option.id));
        let _ = writeln!(
            html,
            r#"<li><a class="filter-option" href="{href}"><input type="radio" name="salary" id="{id}" value="{id}"{checked}> {label}</a></li>"#,
            href = esc(&href),
            id = option.id,
            checked = if checked { " checked" } else { "" },
            label = option.label
        );
    }
    html.push_str("</ul>\n</section>");
    html
}

fn search_bar(filters: &FilterSelection) -> String {
    let query = filters.to_query();
    format!(
        r#"<form class="search-container" method="get" action="/jobs">
<input type="hidden" name="employment_type" value="{employment}">
<input type="hidden" name="minimum_package" value="{package}">
<input type="search" name="search" value="{search}" placeholder="Search" class="search-input">
<button type="submit" class="search-button" data-testid="searchButton">Search</button>
</form>"#,
        employment = esc(&query.employment_type),
        package = esc(&query.minimum_package),
        search = esc(&query.search)
    )
}

fn job_list(jobs: &[JobSummary]) -> String {
    if jobs.is_empty() {
        return format!(
            r#"<div class="no-jobs-view">
<img src="{}" alt="no jobs" class="no-jobs-image">
<h1 class="no-jobs-heading">No Jobs Found</h1>
<p class="no-jobs-text">We could not find any jobs. Try other filters.</p>
</div>"#,
            NO_JOBS_IMG
        );
    }

    let mut html = String::from("<ul class=\"jobs-list\">\n");
    for job in jobs {
        html.push_str(&job_card(job));
        html.push('\n');
    }
    html.push_str("</ul>");
    html
}

fn job_card(job: &JobSummary) -> String {
    format!(
        r#"<li class="job-card"><a class="job-card-link" href="{href}">
<div class="job-card-header">
<img src="{logo}" alt="company logo" class="job-company-logo">
<div class="title-rating"><h1 class="job-title">{title}</h1><p class="rating">{rating}</p></div>
</div>
<div class="location-employment-package">
<p class="location-text">{location}</p>
<p class="employment-text">{employment}</p>
<p class="package-text">{package}</p>
</div>
<hr>
<h1 class="description-heading">Description</h1>
<p class="job-description">{description}</p>
</a></li>"#,
        href = esc(&job_href(&job.id)),
        logo = esc(&job.company_logo_url),
        title = esc(&job.title),
        rating = job.rating,
        location = esc(&job.location),
        employment = esc(&job.employment_type),
        package = esc(&job.package_per_annum),
        description = esc(&job.job_description)
    )
}

// ===== Job detail page =====

pub fn job_detail_page(view: &JobDetailView) -> String {
    let body = match view.project() {
        Projection::Loading => loader(),
        Projection::Data(page) => job_detail_content(page),
        Projection::Failure => failure_view(&job_href(view.id())),
    };

    let title = view
        .state()
        .data()
        .map(|page| page.job_details.title.as_str())
        .unwrap_or("Job Details");

    page(title, &body)
}

fn job_detail_content(page: &JobDetailPage) -> String {
    let similar: String = page.similar_jobs.iter().map(similar_job_card).collect();

    format!(
        r#"<div class="job-details-content">
{card}
<section class="similar-jobs-section">
<h1 class="similar-jobs-heading">Similar Jobs</h1>
<ul class="similar-jobs-list">
{similar}</ul>
</section>
</div>"#,
        card = job_detail_card(&page.job_details),
        similar = similar
    )
}

fn job_detail_card(job: &JobDetail) -> String {
    let skills: String = job.skills.iter().map(skill_item).collect();

    format!(
        r#"<div class="job-details-card">
<div class="job-card-header">
<img src="{logo}" alt="job details company logo" class="job-company-logo">
<div class="title-rating"><h1 class="job-title">{title}</h1><p class="rating">{rating}</p></div>
</div>
<div class="location-employment-package">
<p class="location-text">{location}</p>
<p class="employment-text">{employment}</p>
<p class="package-text">{package}</p>
</div>
<hr>
<div class="description-visit-container">
<h1 class="description-heading">Description</h1>
<a class="visit-link" href="{website}" target="_blank" rel="noreferrer">Visit</a>
</div>
<p class="job-description">{description}</p>
<h1 class="skills-heading">Skills</h1>
<ul class="skills-list">
{skills}</ul>
<section class="life-at-company-section">
<h1 class="life-heading">Life at Company</h1>
<p class="life-description">{life_description}</p>
<img src="{life_img}" alt="life at company" class="life-image">
</section>
</div>"#,
        logo = esc(&job.company_logo_url),
        title = esc(&job.title),
        rating = job.rating,
        location = esc(&job.location),
        employment = esc(&job.employment_type),
        package = esc(&job.package_per_annum),
        website = esc(&job.company_website_url),
        description = esc(&job.job_description),
        skills = skills,
        life_description = esc(&job.life_at_company.description),
        life_img = esc(&job.life_at_company.image_url)
    )
}

fn skill_item(skill: &Skill) -> String {
    format!(
        "<li class=\"skill-item\"><img src=\"{img}\" alt=\"{name}\" class=\"skill-image\"><p class=\"skill-name\">{name}</p></li>\n",
        img = esc(&skill.image_url),
        name = esc(&skill.name)
    )
}

fn similar_job_card(job: &SimilarJob) -> String {
    format!(
        r#"<li class="similar-job-card"><a class="job-card-link" href="{href}">
<div class="job-card-header">
<img src="{logo}" alt="similar job company logo" class="job-company-logo">
<div class="title-rating"><h1 class="job-title">{title}</h1><p class="rating">{rating}</p></div>
</div>
<h1 class="description-heading">Description</h1>
<p class="job-description">{description}</p>
<p class="location-text">{location}</p>
<p class="employment-text">{employment}</p>
</a></li>
"#,
        href = esc(&job_href(&job.id)),
        logo = esc(&job.company_logo_url),
        title = esc(&job.title),
        rating = job.rating,
        description = esc(&job.job_description),
        location = esc(&job.location),
        employment = esc(&job.employment_type)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_href_mirrors_api_query() {
        let mut filters = FilterSelection::new();
        filters.set_search("engineer");
        assert_eq!(
            jobs_href(&filters),
            "/jobs?employment_type=&minimum_package=&search=engineer"
        );
    }

    #[test]
    fn test_initial_views_render_loaders() {
        let html = jobs_page(&ProfileView::new(), &JobListView::new());
        assert_eq!(html.matches("data-testid=\"loader\"").count(), 2);
        assert!(!html.contains("Retry"));
    }

    #[test]
    fn test_job_card_escapes_payload_text() {
        let job = JobSummary {
            id: "1".to_string(),
            title: "<script>alert(1)</script>".to_string(),
            rating: 4.0,
            company_logo_url: "https://example.com/logo.png".to_string(),
            employment_type: "Full Time".to_string(),
            location: "Pune".to_string(),
            package_per_annum: "12 LPA".to_string(),
            job_description: "Tom & Jerry".to_string(),
        };
        let html = job_card(&job);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("<p class=\"rating\">4</p>"));
    }
}
