pub mod client;
pub mod responses;

pub use client::{HttpRecruitApi, RecruitApi};
pub use responses::{NewInternship, NewInterview};
