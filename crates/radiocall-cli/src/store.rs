//! Record sinks for generated bundles.
//!
//! A bundle is stored as one radiocall record plus child records for its
//! instructions, acceptable variations and common errors. Children carry the
//! id of their parent radiocall.

use chrono::{DateTime, Utc};
use radiocall_core::{AcceptableVariation, CommonError, Instruction, Radiocall, RadiocallBundle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use thiserror::Error;
use uuid::Uuid;

/// Collection names, one per record kind.
pub mod collections {
    pub const RADIOCALL: &str = "radiocall";
    pub const INSTRUCTION: &str = "radiocall_instruction";
    pub const VARIATION: &str = "acceptable_variation";
    pub const ERROR: &str = "common_error";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write record: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for generated records.
pub trait RecordSink {
    /// Store a radiocall and return its new id.
    fn create_radiocall(&mut self, radiocall: &Radiocall) -> Result<String, StoreError>;

    fn create_instruction(
        &mut self,
        radiocall_id: &str,
        instruction: &Instruction,
    ) -> Result<String, StoreError>;

    fn create_variation(
        &mut self,
        radiocall_id: &str,
        variation: &AcceptableVariation,
    ) -> Result<String, StoreError>;

    fn create_error(&mut self, radiocall_id: &str, error: &CommonError) -> Result<String, StoreError>;
}

/// Store a bundle, parent first. Returns the radiocall id.
pub fn persist_bundle<S: RecordSink + ?Sized>(
    sink: &mut S,
    bundle: &RadiocallBundle,
) -> Result<String, StoreError> {
    let radiocall_id = sink.create_radiocall(&bundle.radiocall)?;
    for instruction in &bundle.instructions {
        sink.create_instruction(&radiocall_id, instruction)?;
    }
    for variation in &bundle.variations {
        sink.create_variation(&radiocall_id, variation)?;
    }
    for error in &bundle.errors {
        sink.create_error(&radiocall_id, error)?;
    }
    Ok(radiocall_id)
}

#[derive(Serialize)]
struct Record<'a, T: Serialize> {
    collection: &'static str,
    id: &'a str,
    parent: Option<&'a str>,
    created_at: DateTime<Utc>,
    data: &'a T,
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Records written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write<T: Serialize>(
        &mut self,
        collection: &'static str,
        parent: Option<&str>,
        data: &T,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let record = Record {
            collection,
            id: &id,
            parent,
            created_at: Utc::now(),
            data,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(id)
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn create_radiocall(&mut self, radiocall: &Radiocall) -> Result<String, StoreError> {
        self.write(collections::RADIOCALL, None, radiocall)
    }

    fn create_instruction(
        &mut self,
        radiocall_id: &str,
        instruction: &Instruction,
    ) -> Result<String, StoreError> {
        self.write(collections::INSTRUCTION, Some(radiocall_id), instruction)
    }

    fn create_variation(
        &mut self,
        radiocall_id: &str,
        variation: &AcceptableVariation,
    ) -> Result<String, StoreError> {
        self.write(collections::VARIATION, Some(radiocall_id), variation)
    }

    fn create_error(&mut self, radiocall_id: &str, error: &CommonError) -> Result<String, StoreError> {
        self.write(collections::ERROR, Some(radiocall_id), error)
    }
}

/// Counts records instead of writing them.
#[derive(Debug, Default)]
pub struct DryRunSink {
    counts: BTreeMap<&'static str, usize>,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.counts.get(collection).copied().unwrap_or(0)
    }

    fn record(&mut self, collection: &'static str) -> String {
        *self.counts.entry(collection).or_default() += 1;
        Uuid::new_v4().to_string()
    }
}

impl RecordSink for DryRunSink {
    fn create_radiocall(&mut self, radiocall: &Radiocall) -> Result<String, StoreError> {
        tracing::debug!(
            difficulty = %radiocall.difficulty,
            subcategory = %radiocall.subcategory,
            transmission = %radiocall.full_transmission,
            "dry run: would create radiocall"
        );
        Ok(self.record(collections::RADIOCALL))
    }

    fn create_instruction(&mut self, _: &str, _: &Instruction) -> Result<String, StoreError> {
        Ok(self.record(collections::INSTRUCTION))
    }

    fn create_variation(&mut self, _: &str, _: &AcceptableVariation) -> Result<String, StoreError> {
        Ok(self.record(collections::VARIATION))
    }

    fn create_error(&mut self, _: &str, _: &CommonError) -> Result<String, StoreError> {
        Ok(self.record(collections::ERROR))
    }
}
