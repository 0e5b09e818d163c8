pub mod core;
pub mod courses;
pub mod enrollment;
pub mod grades;
pub mod record;
