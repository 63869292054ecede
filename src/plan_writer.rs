use sha2::{Digest, Sha256};
use std::io::{self, BufWriter, Write};

use crate::plan::RenderPlan;

/// Default buffer size for BufWriter in plan JSONL sinks (1 MiB)
pub const BUF_WRITER_CAP_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PlanSinkStats {
    pub total_lines: u64,
    // When hashing is enabled this will contain the hex digest; when disabled it will be None.
    pub plan_sha256_hex: Option<String>,
}

pub trait PlanJsonlSink {
    fn write_line(&mut self, json_line: &[u8]) -> io::Result<()>;
    fn finish_mut(&mut self) -> io::Result<PlanSinkStats>;
}

/// Plain JSONL writer (uncompressed). The sink seam exists so a compressed
/// writer can slot in behind the same trait without touching the assembly.
pub struct PlainJsonlWriter<W: Write> {
    out: BufWriter<W>,
    hasher: Sha256,
    total_lines: u64,
    hashing: bool,
}

impl<W: Write> PlainJsonlWriter<W> {
    pub fn new(out: W, buf_bytes: usize, hashing: bool) -> Self {
        Self {
            out: BufWriter::with_capacity(buf_bytes.max(8 * 1024), out),
            hasher: Sha256::new(),
            total_lines: 0,
            hashing,
        }
    }
}

impl<W: Write> PlanJsonlSink for PlainJsonlWriter<W> {
    fn write_line(&mut self, json_line: &[u8]) -> io::Result<()> {
        self.out.write_all(json_line)?;
        self.out.write_all(b"\n")?;
        if self.hashing {
            self.hasher.update(json_line);
            self.hasher.update(b"\n");
        }
        self.total_lines = self.total_lines.saturating_add(1);
        Ok(())
    }

    fn finish_mut(&mut self) -> io::Result<PlanSinkStats> {
        // Single-flush policy: flush once at the end
        self.out.flush()?;
        let digest = if self.hashing {
            Some(hex::encode(std::mem::take(&mut self.hasher).finalize()))
        } else {
            None
        };
        Ok(PlanSinkStats {
            total_lines: self.total_lines,
            plan_sha256_hex: digest,
        })
    }
}

/// Serialize a plan through a sink: one header line, then one line per page
/// in page order. Returns the sink's final stats.
pub fn write_plan(plan: &RenderPlan, sink: &mut dyn PlanJsonlSink) -> io::Result<PlanSinkStats> {
    let header = serde_json::to_vec(&plan.header)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    sink.write_line(&header)?;

    for page in &plan.pages {
        let line =
            serde_json::to_vec(page).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        sink.write_line(&line)?;
    }

    sink.finish_mut()
}
