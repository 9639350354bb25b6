// tubemark collaborator services
// Seams toward the host browser; the real implementations live in extension glue.

pub mod host_browser;
