use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, ALL_CLASSES};
use crate::rest::absence::{into_absences, AbsenceListParams};
use crate::spreadsheet;

/// Download absences as an Excel workbook.
///
/// With a known `classe` the workbook holds that class only. Otherwise it
/// starts with a summary sheet and adds one sheet per class with absences.
#[utoipa::path(
    get,
    path = "/api/export/excel",
    params(AbsenceListParams),
    responses(
        (status = 200, description = "XLSX workbook", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        (status = 500, description = "Workbook generation failed", body = AppError)
    ),
    tag = "export"
)]
pub async fn export_excel(
    State(pool): State<Pool<Postgres>>,
    Query(params): Query<AbsenceListParams>,
) -> Result<Response, AppError> {
    let classe = params.class_filter();
    let limit = crate::config::absence_settings().list_limit;

    let (bytes, rows) = match classe {
        Some(c) => {
            let absences = into_absences(crate::repo::absence::list(&pool, Some(c), limit).await?)?;
            (spreadsheet::class_workbook(c, &absences)?, absences.len())
        }
        None => {
            // The row limit applies per sheet, so busy classes never crowd
            // quieter ones out of the workbook.
            let mut absences = Vec::new();
            for c in ALL_CLASSES {
                let records = crate::repo::absence::list(&pool, Some(c), limit).await?;
                absences.extend(into_absences(records)?);
            }
            let stats = crate::statistics::collect(&pool, chrono::Utc::now()).await?;
            (spreadsheet::all_classes_workbook(&stats, &absences)?, absences.len())
        }
    };

    let filename = spreadsheet::export_filename(classe);
    tracing::info!(%filename, rows, "excel export generated");

    Ok((
        [
            (header::CONTENT_TYPE, spreadsheet::XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&filename),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// `attachment` disposition carrying both an ASCII fallback and the
/// percent-encoded UTF-8 name, since class names may contain accents.
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() && c != '"' { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filename_disposition() {
        assert_eq!(
            content_disposition("absences_Lune.xlsx"),
            "attachment; filename=\"absences_Lune.xlsx\"; filename*=UTF-8''absences_Lune.xlsx"
        );
    }

    #[test]
    fn accented_filename_gets_ascii_fallback() {
        let value = content_disposition("absences_Étoile.xlsx");
        assert!(value.contains("filename=\"absences__toile.xlsx\""));
        assert!(value.contains("filename*=UTF-8''absences_%C3%89toile.xlsx"));
    }

    #[test]
    fn spaces_are_percent_encoded_in_extended_name() {
        let value = content_disposition("absences_Salle 2.xlsx");
        assert!(value.contains("filename=\"absences_Salle 2.xlsx\""));
        assert!(value.contains("absences_Salle%202.xlsx"));
    }
}
