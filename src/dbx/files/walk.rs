use std::io::Write;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;

use crate::dbx::{ApiResult, Error};

use super::{FileMetadata, ListFolderResult, Metadata};

const DATE_PATTERN: &str = "%m-%d-%Y %H:%M:%S";

/// The three listing operations the directory walker needs from a remote
/// namespace. Implemented by [`super::FilesClient`]; tests run the walker
/// against an in-memory implementation instead.
#[async_trait]
pub trait FolderSource {
    async fn get_metadata(&self, path: &str) -> ApiResult<Metadata>;
    async fn list_folder(&self, path: &str) -> ApiResult<ListFolderResult>;
    async fn list_folder_continue(&self, cursor: &str) -> ApiResult<ListFolderResult>;
}

/// Prints one formatted line per entry reachable from `path`, depth-first.
///
/// A non-empty `path` naming a single file prints that file and returns
/// without listing anything. Otherwise each page of the folder is walked in
/// service order: folders are announced and descended into before their
/// remaining siblings, and pagination is drained fully before returning.
/// Errors abort the whole traversal and propagate to the caller.
pub async fn print_tree<S, W>(source: &S, path: &str, out: &mut W) -> ApiResult<()>
where
    S: FolderSource + Sync,
    W: Write + Send,
{
    walk(source, path, out).await
}

fn walk<'a, S, W>(source: &'a S, path: &'a str, out: &'a mut W) -> BoxFuture<'a, ApiResult<()>>
where
    S: FolderSource + Sync,
    W: Write + Send,
{
    Box::pin(async move {
        if !path.is_empty() {
            if let Metadata::File(file) = source.get_metadata(path).await? {
                return print_file(out, &file);
            }
        }

        let mut result = source.list_folder(path).await?;
        loop {
            for entry in &result.entries {
                match entry {
                    Metadata::Folder(folder) => {
                        // a folder without a display path cannot be descended into
                        let Some(folder_path) =
                            folder.path_display.as_deref().filter(|p| !p.is_empty())
                        else {
                            continue;
                        };
                        announce_folder(out, folder_path)?;
                        walk(source, folder_path, &mut *out).await?;
                    }
                    Metadata::File(file) => print_file(out, file)?,
                    Metadata::Deleted(_) => {}
                }
            }
            if !result.has_more {
                break;
            }
            let next = source.list_folder_continue(&result.cursor).await?;
            result = next;
        }
        Ok(())
    })
}

fn announce_folder<W: Write>(out: &mut W, path_display: &str) -> ApiResult<()> {
    writeln!(out).map_err(Error::DbxIoError)?;
    writeln!(out, "{}\t\t\t : Dir", path_display).map_err(Error::DbxIoError)?;
    write!(out, "  ").map_err(Error::DbxIoError)
}

fn print_file<W: Write>(out: &mut W, file: &FileMetadata) -> ApiResult<()> {
    let mime_type = mime_guess::from_path(&file.name)
        .first_raw()
        .unwrap_or_default();
    writeln!(
        out,
        "- /{} \t: file, {}, {}, modified at: \"{}\"",
        file.name,
        readable_size(file.size),
        mime_type,
        format_date(&file.client_modified, "")
    )
    .map_err(Error::DbxIoError)
}

/// Decimal (base-1000) human-readable size. Values that would display as
/// "1000.0" are bumped to the next unit, so the boundary sits at 999,950 of
/// the current unit's thousandths.
pub fn readable_size(bytes: i64) -> String {
    let sign = if bytes < 0 { "-" } else { "" };
    let mut b = if bytes == i64::MIN {
        i64::MAX
    } else {
        bytes.abs()
    };

    if b < 1000 {
        return format!("{} bytes", bytes);
    }

    for unit in ["KB", "MB", "GB", "TB"] {
        if b < 999_950 {
            return format!("{}{:.1} {}", sign, b as f64 / 1e3, unit);
        }
        b /= 1000;
    }

    if b < 999_950 {
        format!("{}{:.1} PB", sign, b as f64 / 1e3)
    } else {
        format!("{}{:.1} EB", sign, b as f64 / 1e6)
    }
}

/// Fixed `MM-dd-yyyy HH:mm:ss` pattern. The locale parameter is accepted for
/// call-site compatibility but the pattern is locale-insensitive.
pub fn format_date(date: &DateTime<Utc>, _locale: &str) -> String {
    date.format(DATE_PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::{format_date, readable_size};

    #[test]
    fn test_readable_size_under_one_thousand() {
        assert_eq!("0 bytes", readable_size(0));
        assert_eq!("999 bytes", readable_size(999));
        assert_eq!("-999 bytes", readable_size(-999));
    }

    #[test]
    fn test_readable_size_units() {
        assert_eq!("2.0 KB", readable_size(2000));
        assert_eq!("1.0 MB", readable_size(1_000_000));
        assert_eq!("1.0 GB", readable_size(1_000_000_000));
        assert_eq!("1.0 TB", readable_size(1_000_000_000_000));
        assert_eq!("1.0 PB", readable_size(1_000_000_000_000_000));
        assert_eq!("1.0 EB", readable_size(1_000_000_000_000_000_000));
    }

    #[test]
    fn test_readable_size_unit_boundary() {
        assert_eq!("999.9 KB", readable_size(999_949));
        assert_eq!("1.0 MB", readable_size(999_950));
    }

    #[test]
    fn test_readable_size_negative_matches_positive_magnitude() {
        assert_eq!("-2.0 KB", readable_size(-2000));
        assert_eq!("-999.9 KB", readable_size(-999_949));
        assert_eq!("-1.0 MB", readable_size(-999_950));
    }

    #[test]
    fn test_readable_size_min_does_not_overflow() {
        assert_eq!("9.2 EB", readable_size(i64::MAX));
        assert_eq!("-9.2 EB", readable_size(i64::MIN));
    }

    #[test]
    fn test_format_date_fixed_pattern() {
        let date = chrono::Utc.with_ymd_and_hms(2020, 2, 9, 13, 48, 26).unwrap();
        assert_eq!("02-09-2020 13:48:26", format_date(&date, ""));
    }

    #[test]
    fn test_format_date_ignores_locale() {
        let date = chrono::Utc.with_ymd_and_hms(2020, 2, 9, 13, 48, 26).unwrap();
        assert_eq!(format_date(&date, ""), format_date(&date, "sv_SE"));
    }
}
