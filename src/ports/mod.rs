// Seams between the core pipeline and its collaborators.

use std::io;
use std::path::Path;

use oxc_ast::ast::TSType;

use crate::domain::interface::PrimitiveKind;
use crate::error::Result;

/// Resolves a property's type annotation into a primitive kind.
///
/// Implementations decide which annotation shapes they recognize. Anything
/// unrecognized must surface as an error, never as a silently wrong kind.
/// New annotation shapes (arrays, references, unions) are added here, not
/// in the traversal.
pub trait AnnotationResolver: Sync {
    fn resolve(&self, annotation: &TSType<'_>) -> Result<PrimitiveKind>;
}

/// Writes generated guard text to its destination.
pub trait GuardSink: Sync {
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}
