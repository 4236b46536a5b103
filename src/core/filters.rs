// src/core/filters.rs
//! Job list filter state and the query it turns into

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const EMPLOYMENT_TYPES: &[FilterOption] = &[
    FilterOption { id: "FULLTIME", label: "Full Time" },
    FilterOption { id: "PARTTIME", label: "Part Time" },
    FilterOption { id: "FREELANCE", label: "Freelance" },
    FilterOption { id: "INTERNSHIP", label: "Internship" },
];

pub const SALARY_RANGES: &[FilterOption] = &[
    FilterOption { id: "1000000", label: "10 LPA and above" },
    FilterOption { id: "2000000", label: "20 LPA and above" },
    FilterOption { id: "3000000", label: "30 LPA and above" },
    FilterOption { id: "4000000", label: "40 LPA and above" },
];

/// Active search and filter criteria of the job list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    // unique codes, kept in the order they were checked
    employment_types: Vec<String>,
    minimum_package: Option<String>,
    search: String,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a selection from the three request parameters
    pub fn from_params(employment_type: &str, minimum_package: &str, search: &str) -> Self {
        let mut selection = Self::new();
        for code in employment_type.split(',').map(str::trim) {
            if !code.is_empty() {
                selection.set_employment_type(code, true);
            }
        }
        if !minimum_package.is_empty() {
            selection.select_minimum_package(minimum_package);
        }
        selection.set_search(search);
        selection
    }

    pub fn employment_types(&self) -> &[String] {
        &self.employment_types
    }

    pub fn minimum_package(&self) -> Option<&str> {
        self.minimum_package.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_employment_type_selected(&self, code: &str) -> bool {
        self.employment_types.iter().any(|c| c == code)
    }

    /// Add (checked) or remove (unchecked) exactly one code.
    /// Returns whether the selection changed.
    pub fn set_employment_type(&mut self, code: &str, checked: bool) -> bool {
        let present = self.is_employment_type_selected(code);
        match (checked, present) {
            (true, false) => {
                self.employment_types.push(code.to_string());
                true
            }
            (false, true) => {
                self.employment_types.retain(|c| c != code);
                true
            }
            _ => false,
        }
    }

    /// Single-select: replaces whatever was selected before
    pub fn select_minimum_package(&mut self, code: &str) {
        self.minimum_package = Some(code.to_string());
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// Copy with one employment type flipped, used to build toggle links
    pub fn with_employment_type_toggled(&self, code: &str) -> Self {
        let mut next = self.clone();
        let checked = !self.is_employment_type_selected(code);
        next.set_employment_type(code, checked);
        next
    }

    pub fn with_minimum_package(&self, code: &str) -> Self {
        let mut next = self.clone();
        next.select_minimum_package(code);
        next
    }

    pub fn to_query(&self) -> JobsQuery {
        JobsQuery {
            employment_type: self.employment_types.join(","),
            minimum_package: self.minimum_package.clone().unwrap_or_default(),
            search: self.search.clone(),
        }
    }
}

/// The parameters of one `GET /jobs` request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobsQuery {
    pub employment_type: String,
    pub minimum_package: String,
    pub search: String,
}

impl JobsQuery {
    /// Query string in the API's parameter order. Values are not escaped here;
    /// the URL parser applies its own encoding when the request is built.
    pub fn to_query_string(&self) -> String {
        format!(
            "employment_type={}&minimum_package={}&search={}",
            self.employment_type, self.minimum_package, self.search
        )
    }
}
