//! Synthetic identities: names, departments, user codes.

use crate::random::RandomSource;

pub const FIRST_NAMES: &[&str] = &[
    "John", "Sarah", "Michael", "Emily", "David", "Jessica", "Robert", "Ashley", "William",
    "Amanda", "James", "Olivia", "Daniel", "Sophia", "Matthew",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Finance",
    "HR",
    "Sales",
    "IT Security",
    "Research",
    "Operations",
];

/// Prefix of every generated user identifier.
pub const USER_ID_PREFIX: &str = "USR";

const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const USER_ID_LEN: usize = 6;

/// `USR` followed by six upper-case base-36 characters.
pub fn user_identifier<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(USER_ID_PREFIX.len() + USER_ID_LEN);
    id.push_str(USER_ID_PREFIX);
    for _ in 0..USER_ID_LEN {
        id.push(char::from(BASE36_UPPER[rng.index(BASE36_UPPER.len())]));
    }
    id
}

/// "First Last" from the name pools.
pub fn username<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let first = rng.pick(FIRST_NAMES).copied().unwrap_or_default();
    let last = rng.pick(LAST_NAMES).copied().unwrap_or_default();
    format!("{first} {last}")
}

pub fn department<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    rng.pick(DEPARTMENTS).copied().unwrap_or_default().to_string()
}
