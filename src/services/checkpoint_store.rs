//! 检查点存储 - 业务能力层
//!
//! 只负责"读/追加记录文件"能力，不关心流程
//!
//! 文件格式：每行一条记录 `page_id,page_url,threat_count`，无表头，
//! 含逗号、引号或换行的字段用双引号包裹，内部引号写两次

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::ScanRecord;

/// 检查点存储
///
/// 职责：
/// - 启动时读出已记录的页面 ID
/// - 追加单条记录并在返回前落盘
/// - 不做去重，不重写已有内容
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取所有已记录的页面 ID，文件不存在时返回空集合
    pub fn load(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .read_records()?
            .into_iter()
            .map(|record| record.page_id)
            .collect())
    }

    /// 读取全部记录
    pub fn read_records(&self) -> Result<Vec<ScanRecord>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        let rows = split_rows(&content).map_err(|(line, reason)| self.malformed(line, reason))?;
        let mut records = Vec::with_capacity(rows.len());
        for (line, fields) in rows {
            records.push(parse_record(fields).map_err(|reason| self.malformed(line, reason))?);
        }

        debug!(
            "从 {} 读取到 {} 条记录",
            self.path.display(),
            records.len()
        );
        Ok(records)
    }

    /// 追加一条记录
    ///
    /// 返回前调用 `sync_all`，进程在返回后崩溃也不会丢失这一行
    pub async fn append(&self, record: &ScanRecord) -> Result<(), StoreError> {
        debug!(
            "写入记录: 页面 {} | 数量 {} | {}",
            record.page_id, record.threat_count, record.page_url
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        file.write_all(format_row(record).as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|source| self.io_error(source))?;

        Ok(())
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn malformed(&self, line: usize, reason: String) -> StoreError {
        StoreError::Malformed {
            path: self.display_path(),
            line,
            reason,
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display_path(),
            source,
        }
    }
}

fn format_row(record: &ScanRecord) -> String {
    format!(
        "{},{},{}\n",
        quote_field(&record.page_id),
        quote_field(&record.page_url),
        record.threat_count
    )
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn parse_record(fields: Vec<String>) -> Result<ScanRecord, String> {
    if fields.len() != 3 {
        return Err(format!("期望 3 个字段，实际 {} 个", fields.len()));
    }

    let threat_count = fields[2]
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("数量字段无效: '{}'", fields[2]))?;

    let mut fields = fields.into_iter();
    Ok(ScanRecord {
        page_id: fields.next().unwrap_or_default(),
        page_url: fields.next().unwrap_or_default(),
        threat_count,
    })
}

/// 把整个文件切分为记录
///
/// 引号内的换行属于字段内容，记录可以跨多行；返回 `(起始行号, 字段)`，
/// 空行被跳过。出错时返回出错记录的起始行号
fn split_rows(content: &str) -> Result<Vec<(usize, Vec<String>)>, (usize, String)> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            ('\r', false) if chars.peek() == Some(&'\n') => {}
            ('\n', false) => {
                fields.push(std::mem::take(&mut current));
                push_row(&mut rows, row_start, std::mem::take(&mut fields));
                line += 1;
                row_start = line;
            }
            ('\n', true) => {
                line += 1;
                current.push('\n');
            }
            (c, _) => current.push(c),
        }
    }

    if in_quotes {
        return Err((row_start, "引号未闭合".to_string()));
    }
    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        push_row(&mut rows, row_start, fields);
    }
    Ok(rows)
}

fn push_row(rows: &mut Vec<(usize, Vec<String>)>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        rows.push((line, fields));
    }
}
