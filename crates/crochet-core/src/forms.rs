//! Form Validation
//!
//! Client-side validity checks for the contact, add-yarn and add-pattern
//! forms. Nothing submitted here is persisted or sent anywhere.

use crate::error::CatalogueError;

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failed field of one submit folded into a single error, field order kept
pub fn validation_error(errors: &[FieldError]) -> CatalogueError {
    let fields: Vec<String> = errors.iter().map(FieldError::to_string).collect();
    CatalogueError::Validation(fields.join("; "))
}

/// Outcome line shown under a submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Success,
    Failure,
}

impl FormStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            FormStatus::Success => "form_success",
            FormStatus::Failure => "form_failure",
        }
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `local@domain` with a dot somewhere in the domain
fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

// ========================
// Contact
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "message", &self.message);
        if !looks_like_email(&self.email) {
            errors.push(FieldError::new("email", "must be an email address"));
        }
        finish(errors)
    }

    /// Status line and its kind after a submit attempt
    pub fn submit(&self) -> (FormStatus, &'static str) {
        match self.validate() {
            Ok(()) => (FormStatus::Success, "Message Sent!"),
            Err(errors) => {
                log::debug!("Contact form rejected: {}", validation_error(&errors));
                (FormStatus::Failure, "Message not sent!")
            }
        }
    }
}

// ========================
// Add Yarn
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddYarnForm {
    pub name: String,
    pub colour_name: String,
    pub weight: String,
    pub material: String,
    /// Raw text of the quantity input
    pub quantity: String,
}

impl AddYarnForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "colour_name", &self.colour_name);
        require(&mut errors, "weight", &self.weight);
        require(&mut errors, "material", &self.material);
        match self.quantity.trim().parse::<u32>() {
            Ok(q) if q > 0 => {}
            _ => errors.push(FieldError::new("quantity", "must be a positive whole number")),
        }
        finish(errors)
    }
}

// ========================
// Add Pattern
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDraft {
    pub title: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialDraft {
    pub label: String,
    pub value: String,
}

impl MaterialDraft {
    fn is_blank(&self) -> bool {
        self.label.trim().is_empty() && self.value.trim().is_empty()
    }
}

/// Add-pattern form: starts with one step section and one material row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDraft {
    pub name: String,
    pub steps: Vec<StepDraft>,
    pub materials: Vec<MaterialDraft>,
}

impl Default for PatternDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            steps: vec![StepDraft::default()],
            materials: vec![MaterialDraft::default()],
        }
    }
}

impl PatternDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step section; returns its 1-based number
    pub fn add_step(&mut self) -> usize {
        self.steps.push(StepDraft::default());
        self.steps.len()
    }

    pub fn add_material(&mut self) -> usize {
        self.materials.push(MaterialDraft::default());
        self.materials.len()
    }

    /// Material rows with any content
    pub fn filled_materials(&self) -> impl Iterator<Item = &MaterialDraft> {
        self.materials.iter().filter(|m| !m.is_blank())
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        for step in &self.steps {
            require(&mut errors, "step title", &step.title);
            require(&mut errors, "step instructions", &step.instructions);
        }
        finish(errors)
    }
}
