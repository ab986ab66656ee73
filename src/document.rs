//! Loading MediaConvert JSON documents of any supported kind.
//!
//! A document is either wrapped in one of the service's response envelopes
//! (`{"job": ...}`, `{"jobTemplates": [...]}`, ...) or a bare shape whose
//! kind has to be supplied by the caller.

use elemental_common::{Error, Result};
use elemental_model::job::{Job, JobTemplate, Preset};
use elemental_model::operations::{
    CreateJobRequest, CreateJobTemplateRequest, CreatePresetRequest, ListJobTemplatesResponse,
    ListJobsResponse, ListPresetsResponse,
};
use elemental_model::{codec, UnknownValue, UnknownValues};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// The shape a bare document decodes into.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Job,
    #[default]
    JobTemplate,
    Preset,
    CreateJobRequest,
    CreateJobTemplateRequest,
    CreatePresetRequest,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Job => "job",
            DocumentKind::JobTemplate => "job-template",
            DocumentKind::Preset => "preset",
            DocumentKind::CreateJobRequest => "create-job-request",
            DocumentKind::CreateJobTemplateRequest => "create-job-template-request",
            DocumentKind::CreatePresetRequest => "create-preset-request",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Job(Job),
    JobTemplate(JobTemplate),
    Preset(Preset),
    /// A `ListJobs` page.
    Jobs(ListJobsResponse),
    /// A `ListJobTemplates` page.
    JobTemplates(ListJobTemplatesResponse),
    /// A `ListPresets` page.
    Presets(ListPresetsResponse),
    CreateJobRequest(CreateJobRequest),
    CreateJobTemplateRequest(CreateJobTemplateRequest),
    CreatePresetRequest(CreatePresetRequest),
}

/// Envelope keys and the kind of shape found under them.
const SINGLE_ENVELOPES: &[(&str, DocumentKind)] = &[
    ("job", DocumentKind::Job),
    ("jobTemplate", DocumentKind::JobTemplate),
    ("preset", DocumentKind::Preset),
];

const LIST_ENVELOPES: &[(&str, DocumentKind)] = &[
    ("jobs", DocumentKind::Job),
    ("jobTemplates", DocumentKind::JobTemplate),
    ("presets", DocumentKind::Preset),
];

impl Document {
    /// Read and decode the document at `path`.
    ///
    /// See [`Document::parse`] for how `kind` and `default_kind` are used.
    pub fn load(
        path: &Path,
        kind: Option<DocumentKind>,
        default_kind: DocumentKind,
    ) -> Result<Self> {
        tracing::debug!("Loading document {:?}", path);
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, kind, default_kind)
    }

    /// Decode a document from JSON text.
    ///
    /// A response envelope wins over `default_kind`. When `kind` is given the
    /// envelope, if any, must agree with it; without an envelope `kind` is
    /// used, falling back to `default_kind`.
    pub fn parse(text: &str, kind: Option<DocumentKind>, default_kind: DocumentKind) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::invalid_input("empty document"));
        }
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(Error::invalid_input("document must be a JSON object"));
        }

        if let Some((key, detected)) = detect_envelope(&value) {
            tracing::debug!("Detected {:?} envelope", key);
            if let Some(requested) = kind {
                if requested != detected {
                    return Err(Error::invalid_input(format!(
                        "document holds a {detected} envelope but {requested} was requested"
                    )));
                }
            }
            return Self::from_envelope(key, value);
        }

        let kind = kind.unwrap_or(default_kind);
        tracing::debug!("No envelope found, decoding as {}", kind);
        Self::from_bare(kind, value)
    }

    fn from_envelope(key: &str, mut value: Value) -> Result<Self> {
        let document = match key {
            "jobs" => Document::Jobs(serde_json::from_value(value)?),
            "jobTemplates" => Document::JobTemplates(serde_json::from_value(value)?),
            "presets" => Document::Presets(serde_json::from_value(value)?),
            _ => {
                let inner = value
                    .get_mut(key)
                    .map(Value::take)
                    .ok_or_else(|| Error::invalid_input(format!("missing {key:?} member")))?;
                match key {
                    "job" => Document::Job(serde_json::from_value(inner)?),
                    "jobTemplate" => Document::JobTemplate(serde_json::from_value(inner)?),
                    "preset" => Document::Preset(serde_json::from_value(inner)?),
                    other => {
                        return Err(Error::invalid_input(format!("unsupported envelope {other:?}")))
                    }
                }
            }
        };
        Ok(document)
    }

    fn from_bare(kind: DocumentKind, value: Value) -> Result<Self> {
        let document = match kind {
            DocumentKind::Job => Document::Job(serde_json::from_value(value)?),
            DocumentKind::JobTemplate => Document::JobTemplate(serde_json::from_value(value)?),
            DocumentKind::Preset => Document::Preset(serde_json::from_value(value)?),
            DocumentKind::CreateJobRequest => {
                Document::CreateJobRequest(serde_json::from_value(value)?)
            }
            DocumentKind::CreateJobTemplateRequest => {
                Document::CreateJobTemplateRequest(serde_json::from_value(value)?)
            }
            DocumentKind::CreatePresetRequest => {
                Document::CreatePresetRequest(serde_json::from_value(value)?)
            }
        };
        Ok(document)
    }

    /// The kind of shape this document holds. List pages report the kind of
    /// their items.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Job(_) | Document::Jobs(_) => DocumentKind::Job,
            Document::JobTemplate(_) | Document::JobTemplates(_) => DocumentKind::JobTemplate,
            Document::Preset(_) | Document::Presets(_) => DocumentKind::Preset,
            Document::CreateJobRequest(_) => DocumentKind::CreateJobRequest,
            Document::CreateJobTemplateRequest(_) => DocumentKind::CreateJobTemplateRequest,
            Document::CreatePresetRequest(_) => DocumentKind::CreatePresetRequest,
        }
    }

    /// Normalized JSON of the decoded shape, without any single-item envelope.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        macro_rules! encode {
            ($value:expr) => {
                if pretty {
                    codec::to_json_pretty($value)
                } else {
                    codec::to_json($value)
                }
            };
        }
        match self {
            Document::Job(v) => encode!(v),
            Document::JobTemplate(v) => encode!(v),
            Document::Preset(v) => encode!(v),
            Document::Jobs(v) => encode!(v),
            Document::JobTemplates(v) => encode!(v),
            Document::Presets(v) => encode!(v),
            Document::CreateJobRequest(v) => encode!(v),
            Document::CreateJobTemplateRequest(v) => encode!(v),
            Document::CreatePresetRequest(v) => encode!(v),
        }
    }

    /// Every unmodelled enumeration value in the document.
    pub fn unknown_values(&self) -> Vec<UnknownValue> {
        match self {
            Document::Job(v) => v.unknown_values(),
            Document::JobTemplate(v) => v.unknown_values(),
            Document::Preset(v) => v.unknown_values(),
            Document::Jobs(v) => v.unknown_values(),
            Document::JobTemplates(v) => v.unknown_values(),
            Document::Presets(v) => v.unknown_values(),
            Document::CreateJobRequest(v) => v.unknown_values(),
            Document::CreateJobTemplateRequest(v) => v.unknown_values(),
            Document::CreatePresetRequest(v) => v.unknown_values(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Job(v) => fmt::Display::fmt(v, f),
            Document::JobTemplate(v) => fmt::Display::fmt(v, f),
            Document::Preset(v) => fmt::Display::fmt(v, f),
            Document::Jobs(v) => fmt::Display::fmt(v, f),
            Document::JobTemplates(v) => fmt::Display::fmt(v, f),
            Document::Presets(v) => fmt::Display::fmt(v, f),
            Document::CreateJobRequest(v) => fmt::Display::fmt(v, f),
            Document::CreateJobTemplateRequest(v) => fmt::Display::fmt(v, f),
            Document::CreatePresetRequest(v) => fmt::Display::fmt(v, f),
        }
    }
}

fn detect_envelope(value: &Value) -> Option<(&'static str, DocumentKind)> {
    let object = value.as_object()?;
    SINGLE_ENVELOPES
        .iter()
        .find(|(key, _)| object.get(*key).is_some_and(Value::is_object))
        .or_else(|| {
            LIST_ENVELOPES
                .iter()
                .find(|(key, _)| object.get(*key).is_some_and(Value::is_array))
        })
        .copied()
}
