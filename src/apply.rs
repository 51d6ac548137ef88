//! Local job application form. Nothing here is sent anywhere; a valid
//! application is acknowledged and logged.

use serde::{Deserialize, Serialize};

use crate::error::ApplyError;
use crate::types::Job;

const CONTACT_DIGITS: usize = 11;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub position: String,
    pub company: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub reason: String,
}

impl Application {
    /// Blank form for `job`, with position and company filled in.
    pub fn for_job(job: &Job) -> Self {
        Self {
            position: job.title.clone(),
            company: job.company_name.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub position: String,
    pub company: String,
    pub title: String,
    pub message: String,
}

pub fn validate(app: &Application) -> Result<(), ApplyError> {
    let fields = [&app.name, &app.email, &app.contact, &app.reason];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ApplyError::MissingFields);
    }
    if app.contact.len() != CONTACT_DIGITS || !app.contact.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApplyError::InvalidContact);
    }
    if !is_dot_com_email(&app.email) {
        return Err(ApplyError::InvalidEmail);
    }
    Ok(())
}

/// Validate and acknowledge. The application is never transmitted.
pub fn submit(app: &Application) -> Result<Submission, ApplyError> {
    validate(app)?;
    tracing::info!(position = %app.position, company = %app.company, "application submitted (simulated)");
    Ok(Submission {
        position: app.position.clone(),
        company: app.company.clone(),
        title: "Application Submitted!".to_string(),
        message: "Your application has been successfully submitted.".to_string(),
    })
}

// local@domain.com with local in [A-Za-z0-9._%+-] and domain in [A-Za-z0-9.-]
fn is_dot_com_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else { return false; };
    let Some(host) = domain.strip_suffix(".com") else { return false; };

    let local_ok = !local.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let host_ok = !host.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    local_ok && host_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Application {
        Application {
            position: "Engineer".into(),
            company: "Acme".into(),
            name: "Sam Doe".into(),
            email: "sam.doe+jobs@mail.example.com".into(),
            contact: "09171234567".into(),
            reason: "I ship things.".into(),
        }
    }

    #[test]
    fn accepts_complete_application() {
        let sub = submit(&filled()).unwrap();
        assert_eq!(sub.position, "Engineer");
        assert_eq!(sub.company, "Acme");
        assert_eq!(sub.title, "Application Submitted!");
    }

    #[test]
    fn for_job_carries_position_and_company() {
        let job = crate::mapping::normalize_job(&serde_json::json!({ "title": "Engineer", "companyName": "Acme" }));
        let app = Application::for_job(&job);
        assert_eq!((app.position.as_str(), app.company.as_str()), ("Engineer", "Acme"));
        assert_eq!(validate(&app), Err(ApplyError::MissingFields));
    }

    #[test]
    fn missing_fields_checked_first() {
        let app = Application { reason: "  ".into(), contact: "1".into(), ..filled() };
        assert_eq!(validate(&app), Err(ApplyError::MissingFields));
    }

    #[test]
    fn contact_must_be_eleven_digits() {
        for bad in ["0917123456", "091712345678", "0917-123456", "0917123456a"] {
            let app = Application { contact: bad.into(), ..filled() };
            assert_eq!(validate(&app), Err(ApplyError::InvalidContact), "{bad}");
        }
    }

    #[test]
    fn email_must_end_with_dot_com() {
        for good in ["a@yahoo.com", "x_y%z@sub-domain.co.com"] {
            let app = Application { email: good.into(), ..filled() };
            assert!(validate(&app).is_ok(), "{good}");
        }
        for bad in ["a@yahoo.org", "@mail.com", "a@.com", "a b@mail.com", "a@mail.com.ph", "no-at.com"] {
            let app = Application { email: bad.into(), ..filled() };
            assert_eq!(validate(&app), Err(ApplyError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn errors_carry_form_messages() {
        assert_eq!(ApplyError::InvalidContact.title(), "Invalid Contact");
        assert_eq!(ApplyError::MissingFields.to_string(), "Please fill in all fields.");
    }
}
