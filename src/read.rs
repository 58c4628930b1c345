/// Scan parameter building and the page shape returned by a scan.
pub mod scan;
