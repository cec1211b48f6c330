use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::messages::{
    BIO_TOO_LONG, BIRTH_DATE_IN_FUTURE, EMAIL_FORMAT, FULL_NAME_REQUIRED, PHONE_FORMAT,
    USERNAME_TOO_SHORT,
};
use super::{Field, FieldErrors, utf16_len};
use crate::ProfileUpdateRequest;

pub const USERNAME_MIN_LEN: usize = 6;
pub const BIO_MAX_LEN: usize = 160;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").expect("phone pattern"));

/// `YYYY-MM-DD` (what a date input sends) is compared by calendar day, so
/// today is accepted. A full RFC 3339 timestamp is compared to `now` itself.
/// Anything else is never in the future.
fn is_in_future(value: &str, now: DateTime<Utc>) -> bool {
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return day > now.date_naive();
    }
    DateTime::parse_from_rfc3339(value).is_ok_and(|instant| instant.with_timezone(&Utc) > now)
}

impl ProfileUpdateRequest {
    /// Every failing field at once, relative to `now`.
    ///
    /// The same rules run in the profile form and in `PUT /api/profile`.
    pub fn field_errors(&self, now: DateTime<Utc>) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if utf16_len(&self.username) < USERNAME_MIN_LEN {
            errors.insert(Field::Username, USERNAME_TOO_SHORT);
        }

        if self.full_name.is_empty() {
            errors.insert(Field::FullName, FULL_NAME_REQUIRED);
        }

        if !EMAIL.is_match(&self.email) {
            errors.insert(Field::Email, EMAIL_FORMAT);
        }

        if !PHONE.is_match(&self.phone) {
            errors.insert(Field::Phone, PHONE_FORMAT);
        }

        if let Some(birth_date) = self.birth_date.as_deref()
            && is_in_future(birth_date, now)
        {
            errors.insert(Field::BirthDate, BIRTH_DATE_IN_FUTURE);
        }

        if let Some(bio) = &self.bio
            && utf16_len(bio) > BIO_MAX_LEN
        {
            errors.insert(Field::Bio, BIO_TOO_LONG);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-10-16T12:00:00Z".parse().unwrap()
    }

    fn valid() -> ProfileUpdateRequest {
        ProfileUpdateRequest {
            username: "validuser".to_string(),
            full_name: "Valid User".to_string(),
            email: "valid@email.com".to_string(),
            phone: "1234567890".to_string(),
            birth_date: Some("1990-01-01".to_string()),
            bio: Some("A short bio".to_string()),
        }
    }

    fn only_error(req: &ProfileUpdateRequest) -> (Field, String) {
        let errors = req.field_errors(now());
        assert_eq!(errors.len(), 1, "expected a single error, got {errors:?}");
        let (field, msg) = errors.iter().next().unwrap();
        (field, msg.to_string())
    }

    #[test]
    fn valid_profile_passes() {
        assert!(valid().field_errors(now()).is_empty());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let req = ProfileUpdateRequest {
            birth_date: None,
            bio: None,
            ..valid()
        };
        assert!(req.field_errors(now()).is_empty());
    }

    #[test]
    fn short_or_empty_username_is_rejected() {
        for username in ["short", ""] {
            let req = ProfileUpdateRequest {
                username: username.to_string(),
                ..valid()
            };
            assert_eq!(
                only_error(&req),
                (Field::Username, USERNAME_TOO_SHORT.to_string())
            );
        }
    }

    #[test]
    fn full_name_is_not_trimmed() {
        let blank = ProfileUpdateRequest {
            full_name: String::new(),
            ..valid()
        };
        assert_eq!(
            only_error(&blank),
            (Field::FullName, FULL_NAME_REQUIRED.to_string())
        );

        let spaces = ProfileUpdateRequest {
            full_name: "   ".to_string(),
            ..valid()
        };
        assert!(spaces.field_errors(now()).is_empty());
    }

    #[test]
    fn email_must_have_standard_shape() {
        for email in ["", "invalid-email", "a b@c.d", "a@b", "@b.c"] {
            let req = ProfileUpdateRequest {
                email: email.to_string(),
                ..valid()
            };
            assert_eq!(only_error(&req), (Field::Email, EMAIL_FORMAT.to_string()));
        }
    }

    #[test]
    fn phone_length_boundaries() {
        for phone in ["1234567890", "123456789012345"] {
            let req = ProfileUpdateRequest {
                phone: phone.to_string(),
                ..valid()
            };
            assert!(req.field_errors(now()).is_empty(), "{phone} should pass");
        }
        for phone in ["", "123456789", "1234567890123456", "123abc456", "+1234567890"] {
            let req = ProfileUpdateRequest {
                phone: phone.to_string(),
                ..valid()
            };
            assert_eq!(only_error(&req), (Field::Phone, PHONE_FORMAT.to_string()));
        }
    }

    #[test]
    fn birth_date_cannot_be_after_today() {
        let tomorrow = ProfileUpdateRequest {
            birth_date: Some("2026-10-17".to_string()),
            ..valid()
        };
        assert_eq!(
            only_error(&tomorrow),
            (Field::BirthDate, BIRTH_DATE_IN_FUTURE.to_string())
        );

        let today_date = ProfileUpdateRequest {
            birth_date: Some("2026-10-16".to_string()),
            ..valid()
        };
        assert!(today_date.field_errors(now()).is_empty());
    }

    #[test]
    fn timestamp_birth_date_is_compared_to_the_instant() {
        let later_today = ProfileUpdateRequest {
            birth_date: Some("2026-10-16T23:59:59Z".to_string()),
            ..valid()
        };
        assert_eq!(
            only_error(&later_today),
            (Field::BirthDate, BIRTH_DATE_IN_FUTURE.to_string())
        );

        let earlier_today = ProfileUpdateRequest {
            birth_date: Some("2026-10-16T08:00:00+02:00".to_string()),
            ..valid()
        };
        assert!(earlier_today.field_errors(now()).is_empty());
    }

    #[test]
    fn unparseable_birth_date_is_not_flagged() {
        let req = ProfileUpdateRequest {
            birth_date: Some("not a date".to_string()),
            ..valid()
        };
        assert!(req.field_errors(now()).is_empty());
    }

    #[test]
    fn lengths_count_utf16_units() {
        // 80 emoji = 160 UTF-16 units
        let at_max = ProfileUpdateRequest {
            bio: Some("😀".repeat(80)),
            ..valid()
        };
        assert!(at_max.field_errors(now()).is_empty());

        let too_long = ProfileUpdateRequest {
            bio: Some("😀".repeat(81)),
            ..valid()
        };
        assert_eq!(only_error(&too_long), (Field::Bio, BIO_TOO_LONG.to_string()));

        let username = ProfileUpdateRequest {
            username: "😀😀😀".to_string(),
            ..valid()
        };
        assert!(username.field_errors(now()).is_empty());
    }

    #[test]
    fn birth_date_accepts_timestamps() {
        let req = ProfileUpdateRequest {
            birth_date: Some("2030-01-01T00:00:00Z".to_string()),
            ..valid()
        };
        assert_eq!(
            only_error(&req),
            (Field::BirthDate, BIRTH_DATE_IN_FUTURE.to_string())
        );
    }

    #[test]
    fn bio_length_boundary() {
        let at_max = ProfileUpdateRequest {
            bio: Some("a".repeat(BIO_MAX_LEN)),
            ..valid()
        };
        assert!(at_max.field_errors(now()).is_empty());

        let too_long = ProfileUpdateRequest {
            bio: Some("a".repeat(BIO_MAX_LEN + 1)),
            ..valid()
        };
        assert_eq!(only_error(&too_long), (Field::Bio, BIO_TOO_LONG.to_string()));
    }

    #[test]
    fn all_errors_are_reported_together() {
        let req = ProfileUpdateRequest {
            username: "short".to_string(),
            full_name: String::new(),
            email: "invalid-email".to_string(),
            phone: "123".to_string(),
            birth_date: Some("2030-01-01".to_string()),
            bio: Some("a".repeat(161)),
        };
        let errors = req.field_errors(now());
        assert_eq!(errors.len(), 6);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": USERNAME_TOO_SHORT,
                "fullName": FULL_NAME_REQUIRED,
                "email": EMAIL_FORMAT,
                "phone": PHONE_FORMAT,
                "birthDate": BIRTH_DATE_IN_FUTURE,
                "bio": BIO_TOO_LONG,
            })
        );
    }
}
