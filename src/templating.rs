// src/templating.rs
use crate::error::SheetError;
use crate::latex;
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sheetwright_content::{Monster, Spell};

pub const PREAMBLE: &str = "preamble";
pub const SUBCLASSES: &str = "subclasses";
pub const FEATURES: &str = "features";
pub const MAGIC_ITEMS: &str = "magic_items";
pub const SPELLBOOK: &str = "spellbook";
pub const INFUSIONS: &str = "infusions";
pub const DRUID_SHAPES: &str = "druid_shapes";
pub const COMPANIONS: &str = "companions";
pub const POSTAMBLE: &str = "postamble";

const BUILTIN_TEMPLATES: [(&str, &str); 9] = [
    (PREAMBLE, include_str!("../templates/preamble.tex.hbs")),
    (SUBCLASSES, include_str!("../templates/subclasses.tex.hbs")),
    (FEATURES, include_str!("../templates/features.tex.hbs")),
    (MAGIC_ITEMS, include_str!("../templates/magic_items.tex.hbs")),
    (SPELLBOOK, include_str!("../templates/spellbook.tex.hbs")),
    (INFUSIONS, include_str!("../templates/infusions.tex.hbs")),
    (DRUID_SHAPES, include_str!("../templates/druid_shapes.tex.hbs")),
    (COMPANIONS, include_str!("../templates/companions.tex.hbs")),
    (POSTAMBLE, include_str!("../templates/postamble.tex.hbs")),
];

/// The first parameter as text. Missing or null renders as empty.
fn text_param(h: &Helper) -> String {
    match h.param(0).map(|p| p.value()) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn object_param<T: DeserializeOwned>(h: &Helper, helper: &'static str) -> Result<T, RenderError> {
    let value = h
        .param(0)
        .map(|p| p.value().clone())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper, 0))?;
    serde_json::from_value(value)
        .map_err(|e| RenderErrorReason::Other(format!("{helper}: {e}")).into())
}

fn rst_to_latex_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&latex::rst_to_latex(&text_param(h)))?;
    Ok(())
}

fn boxed_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&latex::rst_to_boxlatex(&text_param(h)))?;
    Ok(())
}

fn latex_escape_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&latex::escape(&text_param(h)))?;
    Ok(())
}

fn spell_info_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let spell: Spell = object_param(h, "spellsheetparser")?;
    out.write(&latex::spell_info(&spell))?;
    Ok(())
}

fn monster_info_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let monster: Monster = object_param(h, "monsterdoc")?;
    out.write(&latex::monster_info(&monster))?;
    Ok(())
}

/// Named LaTeX templates and the text filters they use.
///
/// Helpers available to every template:
/// `rst_to_latex`, `boxed`, `latex` (plain escaping), `spellsheetparser`
/// (a spell object) and `monsterdoc` (a monster object).
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// An engine with the built-in section templates registered.
    pub fn new() -> Result<Self, SheetError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        // Output is LaTeX, not HTML; escaping is done by the `latex` helper.
        handlebars.register_escape_fn(no_escape);
        handlebars.register_helper("rst_to_latex", Box::new(rst_to_latex_helper));
        handlebars.register_helper("boxed", Box::new(boxed_helper));
        handlebars.register_helper("latex", Box::new(latex_escape_helper));
        handlebars.register_helper("spellsheetparser", Box::new(spell_info_helper));
        handlebars.register_helper("monsterdoc", Box::new(monster_info_helper));

        let mut engine = Self { handlebars };
        for (name, source) in BUILTIN_TEMPLATES {
            engine.register_template(name, source)?;
        }
        Ok(engine)
    }

    /// Adds or replaces a named template.
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<(), SheetError> {
        self.handlebars
            .register_template_string(name, source)
            .map_err(SheetError::from)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    pub fn render(&self, name: &str, context: &Value) -> Result<String, SheetError> {
        Ok(self.handlebars.render(name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_templates_are_registered() {
        let engine = TemplateEngine::new().unwrap();
        for (name, _) in BUILTIN_TEMPLATES {
            assert!(engine.has_template(name), "{name}");
        }
    }

    #[test]
    fn helpers_are_pure_text_transforms() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template("probe", "{{latex name}}|{{rst_to_latex text}}|{{boxed text}}")
            .unwrap();
        let out = engine
            .render("probe", &json!({"name": "R&D", "text": "**Hi**"}))
            .unwrap();
        assert_eq!(
            out,
            "R\\&D|\\textbf{Hi}|\\begin{framed}\n\\textbf{Hi}\n\\end{framed}"
        );
    }

    #[test]
    fn braces_around_escaped_names() {
        let mut engine = TemplateEngine::new().unwrap();
        engine.register_template("heading", "\\section*{ {{~latex name~}} }").unwrap();
        let out = engine.render("heading", &json!({"name": "Ki_Points"})).unwrap();
        assert_eq!(out, "\\section*{Ki\\_Points}");
    }

    #[test]
    fn object_helpers_take_structured_values() {
        let mut engine = TemplateEngine::new().unwrap();
        engine.register_template("spell", "{{spellsheetparser spell}}").unwrap();
        let out = engine
            .render("spell", &json!({"spell": {"name": "Light", "school": "Evocation"}}))
            .unwrap();
        assert!(out.starts_with("\\textit{Evocation cantrip}"));

        engine.register_template("monster", "{{monsterdoc this}}").unwrap();
        let out = engine.render("monster", &json!({"name": "Wolf", "armor_class": 13})).unwrap();
        assert!(out.contains("\\textbf{Armor Class} 13"));

        let err = engine.render("spell", &json!({"spell": "not a spell"}));
        assert!(err.is_err());
    }
}
