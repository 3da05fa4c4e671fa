use crate::core::{ConfigProvider, Record, RecordOperation, Storage};
use crate::domain::model::value_kind;
use crate::utils::error::{RecordError, Result};
use serde_json::Value;

/// Records read from one input, remembering whether it held a single object.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordBatch {
    Single(Record),
    Many(Vec<Record>),
}

impl RecordBatch {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        match value {
            Value::Array(items) => {
                let records = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Value::Object(_) => Record::from_value(item),
                        other => Err(RecordError::InvalidInput {
                            message: format!(
                                "element {} is {}, expected an object",
                                index,
                                value_kind(&other)
                            ),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RecordBatch::Many(records))
            }
            other => Ok(RecordBatch::Single(Record::from_value(other)?)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordBatch::Single(_) => 1,
            RecordBatch::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads a batch of records, runs one operation over each and renders the results.
pub struct BatchEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BatchEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn extract(&self, input: &str) -> Result<RecordBatch> {
        tracing::debug!("Reading records from {}", input);
        let bytes = self.storage.read_file(input)?;
        let batch = RecordBatch::parse(&bytes)?;
        tracing::info!("Read {} records from {}", batch.len(), input);
        Ok(batch)
    }

    pub fn transform<O: RecordOperation>(
        &self,
        operation: &O,
        batch: &RecordBatch,
    ) -> Result<Value> {
        let output = match batch {
            RecordBatch::Single(record) => operation.apply(record)?,
            RecordBatch::Many(records) => Value::Array(
                records
                    .iter()
                    .map(|record| operation.apply(record))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };
        tracing::info!("Applied '{}' to {} records", operation.name(), batch.len());
        Ok(output)
    }

    pub fn render(&self, output: &Value) -> Result<String> {
        let text = if self.config.pretty_output() {
            serde_json::to_string_pretty(output)?
        } else {
            serde_json::to_string(output)?
        };
        Ok(text)
    }

    /// Runs the whole batch. The rendered output is written to `output` when
    /// given and returned either way.
    pub fn run<O: RecordOperation>(
        &self,
        operation: &O,
        input: &str,
        output: Option<&str>,
    ) -> Result<String> {
        let batch = self.extract(input)?;
        let results = self.transform(operation, &batch)?;
        let rendered = self.render(&results)?;

        if let Some(path) = output {
            tracing::debug!("Writing {} bytes to {}", rendered.len(), path);
            self.storage.write_file(path, rendered.as_bytes())?;
            tracing::info!("Output saved to: {}", path);
        }

        Ok(rendered)
    }
}
