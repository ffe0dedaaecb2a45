//! Canonical spreadsheet column names.
//!
//! Persisted field names mirror the spreadsheet headers verbatim, embedded
//! spaces included. The match is case- and name-exact: "email" or
//! "Amount Paid" do not satisfy the requirement.

/// Attendee name column.
pub const NAME: &str = "Name";
/// Registration year column.
pub const YEAR: &str = "Year";
/// Amount paid column.
pub const AMOUNT_PAID: &str = "Amount paid";
/// Outstanding balance column.
pub const BALANCE_DUE: &str = "Balance need to pay";
/// Email column (unique across all records).
pub const EMAIL: &str = "Email";

/// Columns a spreadsheet must provide before any row is sent to the server.
pub const REQUIRED_COLUMNS: [&str; 5] = [NAME, YEAR, AMOUNT_PAID, BALANCE_DUE, EMAIL];

/// Return the required columns absent from `headers`, in canonical order.
#[must_use]
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == *required))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        let headers = vec![
            "Name",
            "Year",
            "Amount paid",
            "Balance need to pay",
            "Email",
            "Gender",
        ];
        assert!(missing_columns(&headers).is_empty());
    }

    #[test]
    fn test_reports_exactly_the_missing_names() {
        let headers = vec!["Name", "Year", "Email"];
        assert_eq!(
            missing_columns(&headers),
            vec!["Amount paid", "Balance need to pay"]
        );
    }

    #[test]
    fn test_match_is_case_exact() {
        let headers = vec!["name", "YEAR", "Amount Paid", "Balance need to pay", "Email"];
        assert_eq!(
            missing_columns(&headers),
            vec!["Name", "Year", "Amount paid"]
        );
    }
}
