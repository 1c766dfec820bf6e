mod size_tests;
mod tokenize_tests;
