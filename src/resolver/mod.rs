//! Request-path resolution for the bundled content tree.
//!
//! Maps untrusted navigation targets (absolute in-content paths, canonical
//! URL paths, file-URL paths) onto documents inside the content root. The
//! resolver never fails: anything that cannot be resolved safely degrades
//! to the default document.

mod path;


pub use path::ContentResolver;
