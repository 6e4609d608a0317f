//! Boundary between the oxc syntax tree and the interface model.
//!
//! Conversion is atomic per source file: the first unsupported construct
//! aborts extraction, so no partial interface list leaks downstream.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Program, PropertyKey, Statement, TSInterfaceDeclaration, TSSignature, TSType,
};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::domain::interface::{InterfaceDefinition, PrimitiveKind, PropertyDefinition};
use crate::error::{Error, Result};
use crate::ports::AnnotationResolver;

/// Parse TypeScript source text into an oxc program. Any parser diagnostic
/// fails the whole file.
pub fn parse_program<'a>(allocator: &'a Allocator, source_text: &'a str) -> Result<Program<'a>> {
    let ret = Parser::new(allocator, source_text, SourceType::ts()).parse();
    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Parse {
            message: if message.is_empty() {
                "parser bailed out without a diagnostic".to_string()
            } else {
                message
            },
        });
    }
    Ok(ret.program)
}

/// Resolves bare primitive keyword annotations and nothing else.
pub struct KeywordResolver;

impl AnnotationResolver for KeywordResolver {
    fn resolve(&self, annotation: &TSType<'_>) -> Result<PrimitiveKind> {
        match annotation {
            TSType::TSStringKeyword(_) => Ok(PrimitiveKind::String),
            TSType::TSNumberKeyword(_) => Ok(PrimitiveKind::Number),
            TSType::TSBooleanKeyword(_) => Ok(PrimitiveKind::Boolean),
            TSType::TSBigIntKeyword(_) => Ok(PrimitiveKind::BigInt),
            TSType::TSSymbolKeyword(_) => Ok(PrimitiveKind::Symbol),
            TSType::TSUndefinedKeyword(_) => Ok(PrimitiveKind::Undefined),
            TSType::TSNullKeyword(_) => Ok(PrimitiveKind::Null),
            TSType::TSVoidKeyword(_) => Ok(PrimitiveKind::Void),
            TSType::TSAnyKeyword(_) => Ok(PrimitiveKind::Any),
            TSType::TSUnknownKeyword(_) => Ok(PrimitiveKind::Unknown),
            TSType::TSNeverKeyword(_) => Ok(PrimitiveKind::Never),
            TSType::TSObjectKeyword(_) => Ok(PrimitiveKind::Object),
            other => Err(Error::UnsupportedAnnotation {
                found: type_kind_name(other),
            }),
        }
    }
}

/// Walks a program's top-level statements and converts every interface
/// declaration into an [`InterfaceDefinition`].
pub struct InterfaceExtractor<'r> {
    resolver: &'r dyn AnnotationResolver,
}

impl<'r> InterfaceExtractor<'r> {
    pub fn new(resolver: &'r dyn AnnotationResolver) -> Self {
        Self { resolver }
    }

    /// Extract all top-level interfaces, in declaration order. Anything
    /// that is not a bare interface declaration is skipped; interfaces
    /// nested inside blocks or namespaces are not discovered.
    pub fn extract_all(&self, program: &Program<'_>) -> Result<Vec<InterfaceDefinition>> {
        let mut definitions = Vec::new();
        for statement in &program.body {
            if let Statement::TSInterfaceDeclaration(decl) = statement {
                definitions.push(self.extract_interface(decl)?);
            }
        }
        Ok(definitions)
    }

    fn extract_interface(&self, decl: &TSInterfaceDeclaration<'_>) -> Result<InterfaceDefinition> {
        let name = decl.id.name.to_string();
        let properties = decl
            .body
            .body
            .iter()
            .map(|member| self.extract_property(member))
            .collect::<Result<Vec<_>>>()?;
        Ok(InterfaceDefinition { name, properties })
    }

    fn extract_property(&self, member: &TSSignature<'_>) -> Result<PropertyDefinition> {
        let TSSignature::TSPropertySignature(prop) = member else {
            return Err(Error::UnexpectedMember {
                found: member_kind_name(member),
            });
        };

        let name = match &prop.key {
            PropertyKey::StaticIdentifier(ident) => ident.name.to_string(),
            other => {
                return Err(Error::UnexpectedKey {
                    found: key_kind_name(other),
                })
            }
        };

        let kind = match &prop.type_annotation {
            Some(annotation) => Some(self.resolver.resolve(&annotation.type_annotation)?),
            None => None,
        };

        Ok(PropertyDefinition { name, kind })
    }
}

fn member_kind_name(member: &TSSignature<'_>) -> &'static str {
    match member {
        TSSignature::TSPropertySignature(_) => "TSPropertySignature",
        TSSignature::TSIndexSignature(_) => "TSIndexSignature",
        TSSignature::TSCallSignatureDeclaration(_) => "TSCallSignatureDeclaration",
        TSSignature::TSConstructSignatureDeclaration(_) => "TSConstructSignatureDeclaration",
        TSSignature::TSMethodSignature(_) => "TSMethodSignature",
    }
}

fn key_kind_name(key: &PropertyKey<'_>) -> &'static str {
    match key {
        PropertyKey::StaticIdentifier(_) => "Identifier",
        PropertyKey::PrivateIdentifier(_) => "PrivateIdentifier",
        PropertyKey::StringLiteral(_) => "StringLiteral",
        PropertyKey::NumericLiteral(_) => "NumericLiteral",
        PropertyKey::TemplateLiteral(_) => "TemplateLiteral",
        _ => "Expression",
    }
}

fn type_kind_name(ts_type: &TSType<'_>) -> &'static str {
    match ts_type {
        TSType::TSAnyKeyword(_) => "TSAnyKeyword",
        TSType::TSBigIntKeyword(_) => "TSBigIntKeyword",
        TSType::TSBooleanKeyword(_) => "TSBooleanKeyword",
        TSType::TSNeverKeyword(_) => "TSNeverKeyword",
        TSType::TSNullKeyword(_) => "TSNullKeyword",
        TSType::TSNumberKeyword(_) => "TSNumberKeyword",
        TSType::TSObjectKeyword(_) => "TSObjectKeyword",
        TSType::TSStringKeyword(_) => "TSStringKeyword",
        TSType::TSSymbolKeyword(_) => "TSSymbolKeyword",
        TSType::TSUndefinedKeyword(_) => "TSUndefinedKeyword",
        TSType::TSUnknownKeyword(_) => "TSUnknownKeyword",
        TSType::TSVoidKeyword(_) => "TSVoidKeyword",
        TSType::TSArrayType(_) => "TSArrayType",
        TSType::TSTypeReference(_) => "TSTypeReference",
        TSType::TSUnionType(_) => "TSUnionType",
        TSType::TSIntersectionType(_) => "TSIntersectionType",
        TSType::TSLiteralType(_) => "TSLiteralType",
        TSType::TSTypeLiteral(_) => "TSTypeLiteral",
        TSType::TSTupleType(_) => "TSTupleType",
        TSType::TSFunctionType(_) => "TSFunctionType",
        _ => "TSType",
    }
}
