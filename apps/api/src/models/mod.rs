pub mod candidate;
pub mod job;
pub mod matches;
pub mod skills;
