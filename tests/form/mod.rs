//! Tests for the registration form, from draft to request.

mod submit;
