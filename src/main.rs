//! Browser entrypoint: mounts the dashboard.

// The bin shares the lib's dependency list.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use org_graph::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
