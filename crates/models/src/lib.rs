pub mod errors;
pub mod db;
pub mod types;
pub mod user;
pub mod post;
pub mod category;
pub mod offering;
pub mod team_member;
pub mod company_profile;
pub mod running_text;
