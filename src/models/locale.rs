//! Localized user-facing messages.
//!
//! Every failure a service call produces carries one of these strings. The
//! defaults are Arabic; a `locale.toml` can override any of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Action, Entity};

/// Locale configuration root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default)]
    pub messages: Messages,
}

impl LocaleConfig {
    /// Load locale configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load locale configuration or fall back to the built-in strings.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Locale load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }
}

/// User-facing message templates. `{entity}` is replaced with the entity's
/// display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub login_required: String,
    pub missing_base_url: String,
    pub network_unreachable: String,
    pub invalid_response: String,
    pub delete_integrity: String,
    pub not_found: String,
    pub forbidden: String,
    pub load_failed: String,
    pub create_failed: String,
    pub update_failed: String,
    pub delete_failed: String,
    pub load_succeeded: String,
    pub create_succeeded: String,
    pub update_succeeded: String,
    pub delete_succeeded: String,
    pub no_children: String,
    pub duplicate_national_id: String,
    pub department_code_too_short: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            login_required: "الرجاء تسجيل الدخول أولاً".into(),
            missing_base_url: "لم يتم تعيين عنوان الخادم في الإعدادات".into(),
            network_unreachable:
                "تعذر الاتصال بالخادم. يرجى التحقق من اتصال الشبكة والمحاولة مرة أخرى.".into(),
            invalid_response: "خطأ غير متوقع من السيرفر".into(),
            delete_integrity:
                "لا يمكن حذف {entity} لأنه مرتبط ببيانات أخرى في النظام. يرجى إزالة البيانات المرتبطة أولاً."
                    .into(),
            not_found: "لم يتم العثور على {entity} المحدد. قد يكون قد تم حذفه مسبقاً.".into(),
            forbidden: "ليس لديك صلاحية لتنفيذ هذه العملية على {entity}. يرجى مراجعة المسؤول."
                .into(),
            load_failed: "فشل في تحميل {entity}".into(),
            create_failed: "فشل في إضافة {entity}".into(),
            update_failed: "فشل في تحديث {entity}".into(),
            delete_failed: "فشل في حذف {entity}".into(),
            load_succeeded: "تم جلب {entity} بنجاح".into(),
            create_succeeded: "تمت إضافة {entity} بنجاح".into(),
            update_succeeded: "تم تحديث {entity} بنجاح".into(),
            delete_succeeded: "تم حذف {entity} بنجاح".into(),
            no_children: "لا توجد عناصر متاحة لهذا الاختيار".into(),
            duplicate_national_id: "رقم الهوية الوطنية مسجل مسبقاً".into(),
            department_code_too_short: "كود القسم مطلوب ويجب أن يكون حرفين على الأقل".into(),
        }
    }
}

impl Messages {
    /// Fill the `{entity}` placeholder of a template.
    pub fn render(template: &str, entity: Entity) -> String {
        template.replace("{entity}", entity.label())
    }

    /// Default failure message for an action on an entity.
    pub fn failed(&self, action: Action, entity: Entity) -> String {
        let template = match action {
            Action::Load => &self.load_failed,
            Action::Create => &self.create_failed,
            Action::Update => &self.update_failed,
            Action::Delete => &self.delete_failed,
        };
        Self::render(template, entity)
    }

    /// Default success message for an action on an entity.
    pub fn succeeded(&self, action: Action, entity: Entity) -> String {
        let template = match action {
            Action::Load => &self.load_succeeded,
            Action::Create => &self.create_succeeded,
            Action::Update => &self.update_succeeded,
            Action::Delete => &self.delete_succeeded,
        };
        Self::render(template, entity)
    }

    pub fn integrity(&self, entity: Entity) -> String {
        Self::render(&self.delete_integrity, entity)
    }

    pub fn not_found(&self, entity: Entity) -> String {
        Self::render(&self.not_found, entity)
    }

    pub fn forbidden(&self, entity: Entity) -> String {
        Self::render(&self.forbidden, entity)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn render_fills_entity_label() {
        let messages = Messages::default();
        let text = messages.integrity(Entity::Track);
        assert!(text.contains(Entity::Track.label()));
        assert!(!text.contains("{entity}"));
    }

    #[test]
    fn action_templates_differ() {
        let messages = Messages::default();
        assert_ne!(
            messages.failed(Action::Create, Entity::Course),
            messages.failed(Action::Delete, Entity::Course)
        );
        assert_eq!(
            messages.succeeded(Action::Delete, Entity::Course),
            "تم حذف المقرر بنجاح"
        );
    }

    #[test]
    fn partial_locale_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[messages]\nlogin_required = \"Please log in\"").unwrap();

        let locale = LocaleConfig::load(file.path()).unwrap();
        assert_eq!(locale.messages.login_required, "Please log in");
        assert_eq!(
            locale.messages.no_children,
            Messages::default().no_children
        );
    }
}
