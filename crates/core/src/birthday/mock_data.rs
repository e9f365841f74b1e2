//! Mock data generation for testing and seeding.
//!
//! Pure functions that produce birthday inputs. They have no side effects and
//! can be used in unit tests and database seeding alike.

use chrono::NaiveDate;

use super::types::NewBirthday;

const SEED_PEOPLE: [(&str, i32, u32, u32); 10] = [
    ("Ada Lovelace", 1815, 12, 10),
    ("Grace Hopper", 1906, 12, 9),
    ("Alan Turing", 1912, 6, 23),
    ("Katherine Johnson", 1918, 8, 26),
    ("Edsger Dijkstra", 1930, 5, 11),
    ("Barbara Liskov", 1939, 11, 7),
    ("Donald Knuth", 1938, 1, 10),
    ("Margaret Hamilton", 1936, 8, 17),
    ("Dennis Ritchie", 1941, 9, 9),
    ("Frances Allen", 1932, 8, 4),
];

/// Generate `count` deterministic birthday inputs for the given owner.
///
/// Names repeat with a numeric suffix once the built-in list is exhausted,
/// so every generated input is distinct.
///
/// # Example
///
/// ```
/// use birthdays_core::birthday::generate_seed_birthdays;
///
/// let seeds = generate_seed_birthdays("u1", 3);
///
/// assert_eq!(seeds.len(), 3);
/// assert!(seeds.iter().all(|b| b.user_id == "u1"));
/// ```
pub fn generate_seed_birthdays(user_id: &str, count: usize) -> Vec<NewBirthday> {
    SEED_PEOPLE
        .iter()
        .filter_map(|&(name, y, m, d)| NaiveDate::from_ymd_opt(y, m, d).map(|date| (name, date)))
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, (name, date))| {
            let round = i / SEED_PEOPLE.len();
            let name = if round == 0 {
                name.to_string()
            } else {
                format!("{name} ({})", round + 1)
            };
            NewBirthday::new(name, date, user_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_seed_birthdays("u1", 0).len(), 0);
        assert_eq!(generate_seed_birthdays("u1", 4).len(), 4);
        assert_eq!(generate_seed_birthdays("u1", 25).len(), 25);
    }

    #[test]
    fn test_all_seeds_belong_to_owner() {
        let seeds = generate_seed_birthdays("owner-42", 12);
        assert!(seeds.iter().all(|b| b.user_id == "owner-42"));
    }

    #[test]
    fn test_names_stay_distinct_past_the_builtin_list() {
        let seeds = generate_seed_birthdays("u1", 23);
        let names: HashSet<&str> = seeds.iter().map(|b| b.name.as_str()).collect();

        assert_eq!(names.len(), 23);
        assert!(names.contains("Ada Lovelace"));
        assert!(names.contains("Ada Lovelace (2)"));
        assert!(names.contains("Ada Lovelace (3)"));
    }

    #[test]
    fn test_first_seed_is_stable() {
        let seeds = generate_seed_birthdays("u1", 1);

        assert_eq!(seeds[0].name, "Ada Lovelace");
        assert_eq!(
            seeds[0].date,
            NaiveDate::from_ymd_opt(1815, 12, 10).unwrap()
        );
    }
}
