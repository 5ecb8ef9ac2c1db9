use std::collections::BTreeMap;

use gloo_net::http::Request;
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

pub const SERVICE_OPTIONS: &[&str] = &[
    "Product Development",
    "Research & Innovation",
    "Technology Consulting",
    "Digital Transformation",
    "Other",
];

pub const BUDGET_OPTIONS: &[&str] = &[
    "Under $10k",
    "$10k - $50k",
    "$50k - $100k",
    "$100k+",
];

pub const REVENUE_OPTIONS: &[&str] = &[
    "Pre-revenue",
    "Under $1M",
    "$1M - $10M",
    "$10M+",
];

pub const TIMELINE_OPTIONS: &[&str] = &[
    "As soon as possible",
    "1-3 months",
    "3-6 months",
    "Just exploring",
];

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Body posted to the lead webhook.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub website: String,
    pub services: Vec<String>,
    pub budget: String,
    pub description: String,
    pub revenue: String,
    pub timeline: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Services,
}

pub type FieldErrors = BTreeMap<LeadField, &'static str>;

impl LeadSubmission {
    pub fn blank() -> Self {
        Self {
            budget: BUDGET_OPTIONS[0].to_string(),
            revenue: REVENUE_OPTIONS[0].to_string(),
            timeline: TIMELINE_OPTIONS[0].to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(LeadField::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(LeadField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(LeadField::Email, "Email is invalid");
        }

        if self.company.trim().is_empty() {
            errors.insert(LeadField::Company, "Company is required");
        }

        if self.services.is_empty() {
            errors.insert(LeadField::Services, "Pick at least one service");
        }

        errors
    }

    pub fn toggle_service(&mut self, service: &str) {
        match self.services.iter().position(|s| s == service) {
            Some(index) => {
                self.services.remove(index);
            }
            None => self.services.push(service.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("could not encode lead: {0}")]
    Encode(String),
    #[error("webhook unreachable: {0}")]
    Network(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
}

/// Posts the lead once. Failures are returned to the caller as is.
pub async fn submit_lead(lead: &LeadSubmission) -> Result<(), LeadError> {
    let request = Request::post(config::lead_webhook_url())
        .header("Content-Type", "application/json")
        .json(lead)
        .map_err(|e| LeadError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| LeadError::Network(e.to_string()))?;

    if response.ok() {
        info!("Lead from {} delivered", lead.company);
        Ok(())
    } else {
        error!("Lead webhook returned {}", response.status());
        Err(LeadError::Status(response.status()))
    }
}
