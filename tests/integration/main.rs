mod batch_test;
mod e2e_test;
mod model_test;
mod pricing_test;
