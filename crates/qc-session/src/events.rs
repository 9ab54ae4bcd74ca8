//! Telemetry event names recorded by the session controller.

pub const SESSION_START: &str = "session_start";
pub const MODULE_SELECT: &str = "module_select";
pub const MODULE_COMPLETE: &str = "module_complete";
pub const EVIDENCE_LAB_OPENED: &str = "evidence_lab_opened";
pub const CERTIFICATE_VIEWED: &str = "certificate_viewed";
pub const CERTIFICATE_DOWNLOAD_START: &str = "certificate_download_start";
pub const CERTIFICATE_DOWNLOAD_SUCCESS: &str = "certificate_download_success";
pub const CERTIFICATE_DOWNLOAD_ERROR: &str = "certificate_download_error";
