// Macros are exported via #[macro_export] in their respective files
mod try_capture;
