pub mod chart;
pub mod data_source;
pub mod errors;
pub mod events;
pub mod gesture;
pub mod logging;
pub mod scrollbar;
pub mod window;
