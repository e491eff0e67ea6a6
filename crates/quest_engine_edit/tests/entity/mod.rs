mod model_tests;
mod presentation_tests;
