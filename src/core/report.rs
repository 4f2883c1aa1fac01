use crate::domain::model::DomainRecordReport;
use crate::utils::error::Result;
use std::io::Write;

/// Column header printed before any input is read. The `sprRecord` spelling and
/// the space before `hasDMARC` are part of the established output format.
pub const CSV_HEADER: &str = "domain,hasMX,hasSPF,sprRecord, hasDMARC,dmarcRecord";

pub const EMAIL_VALID: &str = "Email is valid";
pub const EMAIL_NOT_VALID: &str = "Email is not valid";
pub const EMAIL_USED: &str = "Email is being actively used";
pub const EMAIL_NOT_USED: &str = "Email is not being actively used";

/// Writes the CSV header, record rows and status lines to one sink.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "{}", CSV_HEADER)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_records(&mut self, report: &DomainRecordReport) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut self.out);
        csv_writer.serialize(report)?;
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_syntax_status(&mut self, valid: bool) -> Result<()> {
        self.write_line(if valid { EMAIL_VALID } else { EMAIL_NOT_VALID })
    }

    pub fn write_usage_status(&mut self, used: bool) -> Result<()> {
        self.write_line(if used { EMAIL_USED } else { EMAIL_NOT_USED })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}
