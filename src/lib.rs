// ABOUTME: Library module for the termconf program.
// ABOUTME: Contains the pipeline that turns a config and Markdown content into a conference site.

// Reexport modules
pub mod conference;
pub mod config;
pub mod convert;
pub mod errors;
pub mod html;
pub mod loader;
pub mod pdf;
pub mod pipeline;
pub mod print;
pub mod sections;
pub mod serve;
pub mod site;
pub mod utils;

// Reexport common types and functions
pub use conference::ConferenceConfig;
pub use config::{BuildConfig, Layout};
pub use convert::{fallback_html, render_sections, Converter, PandocConverter};
pub use errors::{Result, SiteError};
pub use html::generate_index_html;
pub use pipeline::{run_build, run_build_with, BuildReport};
pub use print::generate_print_html;
pub use sections::{split_sections, SectionMap};
pub use serve::serve_site;
