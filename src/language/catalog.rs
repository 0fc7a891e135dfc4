//! UI strings and prompt templates per language
//!
//! Templates use `{key}` placeholders. The catalog refuses to build if a
//! template is missing one of its keys or names a key nobody fills in.

use crate::error::{NameForgeError, Result};
use crate::types::Language;
use regex::Regex;
use std::collections::BTreeSet;

/// Keys filled into the similar-name prompt
pub const SIMILAR_NAME_KEYS: &[&str] = &["name", "min", "max"];

/// Keys filled into the attribute prompt
pub const ATTRIBUTE_KEYS: &[&str] = &["industry", "unique_feature", "min", "max"];

/// Every message for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub instruction: &'static str,
    pub proposed_name: &'static str,
    pub name_taken: &'static str,
    pub similar_names: &'static str,
    pub generating_names: &'static str,
    pub updated_suggestions: &'static str,
    pub additional_info: &'static str,
    pub industry: &'static str,
    pub unique_feature: &'static str,
    pub suggested_names: &'static str,
    pub no_suggestions: &'static str,
    pub name_available: &'static str,
    pub similar_name_prompt: &'static str,
    pub attribute_prompt: &'static str,
}

impl Messages {
    fn ui_strings(&self) -> [(&'static str, &'static str); 13] {
        [
            ("title", self.title),
            ("instruction", self.instruction),
            ("proposed_name", self.proposed_name),
            ("name_taken", self.name_taken),
            ("similar_names", self.similar_names),
            ("generating_names", self.generating_names),
            ("updated_suggestions", self.updated_suggestions),
            ("additional_info", self.additional_info),
            ("industry", self.industry),
            ("unique_feature", self.unique_feature),
            ("suggested_names", self.suggested_names),
            ("no_suggestions", self.no_suggestions),
            ("name_available", self.name_available),
        ]
    }

    pub fn english() -> Self {
        Self {
            title: "Company Name Availability Checker & Generator",
            instruction: "Enter a proposed company name to check its availability and get suggestions if it's taken.",
            proposed_name: "Enter the proposed company name:",
            name_taken: "The proposed name is taken or similar to an existing company name.",
            similar_names: "Here are some similar names that are already taken:",
            generating_names: "Generating updated names based on similar names...",
            updated_suggestions: "Updated name suggestions for",
            additional_info: "To help generate better names, please answer the following questions:",
            industry: "Enter the industry of your company:",
            unique_feature: "Enter a unique feature of your company:",
            suggested_names: "Here are some suggested names for your new company:",
            no_suggestions: "Sorry, we couldn't generate any new names at the moment.",
            name_available: "The proposed name is available. You can use it for your new company.",
            similar_name_prompt: "Q: Provide updated versions of the following company name that are still recognizable but distinct:\n\
                A: Original Company Name: {name}\n\
                Generate {min} to {max} names that are updated versions of this name.\n\
                Return the names as one list in square brackets, for example ['First Name', 'Second Name'].",
            attribute_prompt: "Q: Generate {min} to {max} unique company names based on the following information:\n\
                A: Industry: {industry}\n\
                A: Unique Feature: {unique_feature}\n\
                Generate names that are creative and appropriate for a company in this industry.\n\
                Return the names as one list in square brackets, for example ['First Name', 'Second Name'].",
        }
    }

    pub fn arabic() -> Self {
        Self {
            title: "مدقق ومولد توفر أسماء الشركات",
            instruction: "أدخل الاسم المقترح للشركة للتحقق من توفره والحصول على اقتراحات إذا كان الاسم مستخدمًا.",
            proposed_name: "أدخل الاسم المقترح للشركة:",
            name_taken: "الاسم المقترح مستخدم أو مشابه لاسم شركة موجودة.",
            similar_names: "إليك بعض الأسماء المشابهة التي تم استخدامها بالفعل:",
            generating_names: "جارٍ إنشاء أسماء محدثة بناءً على الأسماء المشابهة...",
            updated_suggestions: "اقتراحات أسماء محدثة لـ",
            additional_info: "للمساعدة في إنشاء أسماء أفضل، يرجى الإجابة على الأسئلة التالية:",
            industry: "أدخل مجال عمل شركتك:",
            unique_feature: "أدخل ميزة فريدة لشركتك:",
            suggested_names: "إليك بعض الأسماء المقترحة لشركتك الجديدة:",
            no_suggestions: "عذرًا، لم نتمكن من إنشاء أي أسماء جديدة في الوقت الحالي.",
            name_available: "الاسم المقترح متاح. يمكنك استخدامه لشركتك الجديدة.",
            similar_name_prompt: "س: قدّم نسخًا محدّثة من اسم الشركة التالي تبقى مألوفة لكنها مميزة:\n\
                ج: اسم الشركة الأصلي: {name}\n\
                أنشئ من {min} إلى {max} أسماء تكون نسخًا محدّثة من هذا الاسم.\n\
                أعد الأسماء كقائمة واحدة بين قوسين معقوفين، مثل ['الاسم الأول', 'الاسم الثاني'].",
            attribute_prompt: "س: أنشئ من {min} إلى {max} أسماء شركات فريدة بناءً على المعلومات التالية:\n\
                ج: مجال العمل: {industry}\n\
                ج: الميزة الفريدة: {unique_feature}\n\
                أنشئ أسماء مبتكرة ومناسبة لشركة في هذا المجال.\n\
                أعد الأسماء كقائمة واحدة بين قوسين معقوفين، مثل ['الاسم الأول', 'الاسم الثاني'].",
        }
    }
}

/// Validated messages for every supported language
#[derive(Debug, Clone)]
pub struct Catalog {
    english: Messages,
    arabic: Messages,
}

impl Catalog {
    pub fn new(english: Messages, arabic: Messages) -> Result<Self> {
        validate(Language::English, &english)?;
        validate(Language::Arabic, &arabic)?;
        Ok(Self { english, arabic })
    }

    /// The shipped English and Arabic messages
    pub fn builtin() -> Result<Self> {
        Self::new(Messages::english(), Messages::arabic())
    }

    pub fn get(&self, language: Language) -> &Messages {
        match language {
            Language::English => &self.english,
            Language::Arabic => &self.arabic,
        }
    }
}

fn placeholder_regex() -> Result<Regex> {
    Regex::new(r"\{([a-z_]+)\}")
        .map_err(|e| NameForgeError::internal(format!("Invalid placeholder regex: {}", e)))
}

/// Placeholder keys used by a template
pub fn placeholders(template: &str) -> Result<BTreeSet<String>> {
    let re = placeholder_regex()?;
    Ok(re
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect())
}

/// Fill `{key}` placeholders; unknown keys are left untouched
pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String> {
    let re = placeholder_regex()?;
    let rendered = re.replace_all(template, |caps: &regex::Captures| {
        values
            .iter()
            .find(|(key, _)| *key == &caps[1])
            .map(|(_, value)| value.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    });
    Ok(rendered.into_owned())
}

fn validate(language: Language, messages: &Messages) -> Result<()> {
    for (key, value) in messages.ui_strings() {
        if value.trim().is_empty() {
            return Err(crate::config_error!(
                "{} catalog: message '{}' is empty",
                language.code(),
                key
            ));
        }
    }

    check_template(language, "similar_name_prompt", messages.similar_name_prompt, SIMILAR_NAME_KEYS)?;
    check_template(language, "attribute_prompt", messages.attribute_prompt, ATTRIBUTE_KEYS)?;
    Ok(())
}

fn check_template(language: Language, key: &str, template: &str, required: &[&str]) -> Result<()> {
    let found = placeholders(template)?;

    if let Some(missing) = required.iter().find(|k| !found.contains(**k)) {
        return Err(crate::config_error!(
            "{} catalog: '{}' is missing placeholder {{{}}}",
            language.code(),
            key,
            missing
        ));
    }
    if let Some(unknown) = found.iter().find(|k| !required.contains(&k.as_str())) {
        return Err(crate::config_error!(
            "{} catalog: '{}' uses unknown placeholder {{{}}}",
            language.code(),
            key,
            unknown
        ));
    }
    Ok(())
}
