//! Curriculum domain: prompt assembly, payload mapping, validation, and
//! the generation orchestrator.

mod generator;
pub mod mapper;
pub mod prompts;
pub mod validator;

pub use generator::{CurriculumGenerator, CurriculumGeneratorBuilder};
pub use validator::{ValidationReport, validate};
