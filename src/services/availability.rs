use chrono::NaiveDate;

use crate::models::Booking;

/// Whether `room_no` is free for the half-open stay `[check_in, check_out)`.
///
/// A check-out on day X never conflicts with a check-in on day X.
pub fn is_available(
    room_no: u32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    bookings: &[Booking],
) -> bool {
    !bookings.iter().any(|b| {
        b.room_no == room_no && !(check_out <= b.check_in || check_in >= b.check_out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(room_no: u32, ci: &str, co: &str) -> Booking {
        Booking {
            name: "Asha".to_string(),
            room_no,
            room_type: "Deluxe".to_string(),
            check_in: d(ci),
            check_out: d(co),
        }
    }

    #[test]
    fn test_empty_room_is_available() {
        assert!(is_available(101, d("2025-01-01"), d("2025-01-03"), &[]));
    }

    #[test]
    fn test_overlap_conflicts() {
        let existing = [booking(101, "2025-01-01", "2025-01-03")];
        assert!(!is_available(101, d("2025-01-02"), d("2025-01-04"), &existing));
        assert!(!is_available(101, d("2024-12-31"), d("2025-01-02"), &existing));
        assert!(!is_available(101, d("2024-12-30"), d("2025-01-10"), &existing));
        assert!(!is_available(101, d("2025-01-01"), d("2025-01-03"), &existing));
    }

    #[test]
    fn test_back_to_back_stays_do_not_conflict() {
        let existing = [booking(101, "2025-01-01", "2025-01-03")];
        assert!(is_available(101, d("2025-01-03"), d("2025-01-05"), &existing));
        assert!(is_available(101, d("2024-12-30"), d("2025-01-01"), &existing));
    }

    #[test]
    fn test_other_rooms_are_ignored() {
        let existing = [booking(102, "2025-01-01", "2025-01-03")];
        assert!(is_available(101, d("2025-01-01"), d("2025-01-03"), &existing));
    }

    #[test]
    fn test_matches_interval_definition_exhaustively() {
        let existing = [
            booking(101, "2025-01-05", "2025-01-08"),
            booking(101, "2025-01-12", "2025-01-13"),
        ];
        let base = d("2025-01-01");
        for start in 0..16 {
            for len in 1..6 {
                let ci = base + chrono::Duration::days(start);
                let co = ci + chrono::Duration::days(len);
                let expected = !existing
                    .iter()
                    .any(|b| !(co <= b.check_in || ci >= b.check_out));
                assert_eq!(is_available(101, ci, co, &existing), expected, "{ci}..{co}");
            }
        }
    }
}
