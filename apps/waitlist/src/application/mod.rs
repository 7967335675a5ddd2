pub mod submit_signup;
