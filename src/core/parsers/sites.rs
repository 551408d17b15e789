//! Candidate site discovery over a parsed JavaScript/TypeScript module.
//!
//! A single traversal collects:
//! - call sites: calls whose callee (`qsTr(...)`, `obj.tr(...)`) names a
//!   marker in the [`MarkerTable`]
//! - declaration sites: functions, classes, class methods and class
//!   properties, with the end of the preceding sibling as boundary for doc
//!   comment lookup

use swc_common::{BytePos, Span, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, ClassDecl, ClassMember, ClassMethod, ClassProp, Expr, FnDecl, MemberProp,
    ModuleItem, PropName, Stmt,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::extract::{CandidateSite, DeclarationKind};
use crate::core::markers::MarkerTable;
use crate::core::parsers::js::ParsedJs;

/// Sites of one file, in traversal order.
#[derive(Debug, Default)]
pub struct FileSites {
    pub calls: Vec<CandidateSite>,
    pub declarations: Vec<CandidateSite>,
}

pub struct SiteCollector<'a> {
    parsed: &'a ParsedJs,
    markers: &'a MarkerTable,
    /// Context given to every site of the file.
    context: String,
    /// End offset of the previous sibling at the current nesting level.
    last_end: Option<usize>,
    sites: FileSites,
}

impl<'a> SiteCollector<'a> {
    pub fn new(parsed: &'a ParsedJs, markers: &'a MarkerTable, context: impl Into<String>) -> Self {
        Self {
            parsed,
            markers,
            context: context.into(),
            last_end: None,
            sites: FileSites::default(),
        }
    }

    /// Walk the module and return everything found.
    pub fn collect(mut self) -> FileSites {
        let parsed = self.parsed;
        parsed.module.visit_with(&mut self);
        self.sites
    }

    fn offset(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.parsed.start_pos.0) as usize
    }

    fn slice(&self, span: Span) -> String {
        self.parsed
            .source
            .slice(self.offset(span.lo)..self.offset(span.hi))
            .unwrap_or_default()
            .to_string()
    }

    fn callee_name(callee: &Callee) -> Option<&str> {
        let Callee::Expr(expr) = callee else {
            return None;
        };
        match &**expr {
            Expr::Ident(ident) => Some(ident.sym.as_str()),
            Expr::Member(member) => match &member.prop {
                MemberProp::Ident(prop) => Some(prop.sym.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    fn declare(&mut self, span: Span, kind: DeclarationKind, name: &str) {
        let location = self.parsed.source.location(self.offset(span.lo));
        let site = CandidateSite::declaration(location, kind, name, self.last_end)
            .with_context(self.context.clone());
        self.sites.declarations.push(site);
    }

    /// Visit sibling nodes, moving the doc comment boundary past each one.
    fn visit_siblings<T: VisitWith<Self> + Spanned>(&mut self, items: &[T]) {
        let saved = self.last_end;
        for item in items {
            item.visit_with(self);
            self.last_end = Some(self.offset(item.span().hi));
        }
        self.last_end = saved;
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

impl Visit for SiteCollector<'_> {
    fn visit_module_items(&mut self, items: &[ModuleItem]) {
        self.visit_siblings(items);
    }

    fn visit_stmts(&mut self, stmts: &[Stmt]) {
        self.visit_siblings(stmts);
    }

    fn visit_class_members(&mut self, members: &[ClassMember]) {
        self.visit_siblings(members);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(name) = Self::callee_name(&node.callee)
            && let Some(marker) = self.markers.lookup(name)
        {
            let location = self.parsed.source.location(self.offset(node.span.lo));
            let arguments = node.args.iter().map(|arg| self.slice(arg.span())).collect();
            let site = CandidateSite::call(location, marker, name, arguments)
                .with_context(self.context.clone());
            self.sites.calls.push(site);
        }
        node.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.declare(node.span(), DeclarationKind::Method, node.ident.sym.as_str());
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.declare(node.span(), DeclarationKind::Type, node.ident.sym.as_str());
        node.visit_children_with(self);
    }

    fn visit_class_method(&mut self, node: &ClassMethod) {
        if let Some(name) = prop_name(&node.key) {
            self.declare(node.span, DeclarationKind::Method, &name);
        }
        node.visit_children_with(self);
    }

    fn visit_class_prop(&mut self, node: &ClassProp) {
        if let Some(name) = prop_name(&node.key) {
            self.declare(node.span, DeclarationKind::Property, &name);
        }
        node.visit_children_with(self);
    }
}
