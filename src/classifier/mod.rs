//! Gaussian Naive Bayes classification over a completed questionnaire.

mod engine;

pub use engine::{gaussian_pdf, Classification, ClassScore, GaussianNb, DENSITY_FLOOR};
