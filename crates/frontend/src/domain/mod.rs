pub mod a001_university;
pub mod a002_subdivision;
pub mod a003_study_group;
pub mod a004_curriculum;
pub mod a005_person;
pub mod common;
