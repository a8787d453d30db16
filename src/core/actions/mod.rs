pub mod cancellation;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod render_escape_field;
pub mod render_view;
