use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError};
use shared_types::{parse_french_date, Absence, AppError, ClassStatistic, Classe, ALL_CLASSES};

/// MIME type of the generated workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const ABSENCE_HEADERS: [&str; 6] = ["Date", "Nom", "Prénom", "Motif", "Justifié", "Remarques"];
const SUMMARY_HEADERS: [&str; 4] = [
    "Classe",
    "Total Absences",
    "Non Justifiées",
    "Absences Récentes",
];
const SUMMARY_SHEET: &str = "Résumé";

/// Cell styles shared by every sheet of a workbook.
struct Styles {
    header: Format,
    unjustified: Format,
    normal: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x366092))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
            unjustified: Format::new()
                .set_background_color(Color::RGB(0xFFCCCC))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin),
            normal: Format::new().set_border(FormatBorder::Thin),
        }
    }
}

/// Download filename for an export, scoped to one class or covering all of them.
pub fn export_filename(classe: Option<Classe>) -> String {
    match classe {
        Some(c) => format!("absences_{}.xlsx", c.as_str()),
        None => "absences_toutes_classes.xlsx".to_string(),
    }
}

/// Workbook with a single sheet listing the absences of one class.
pub fn class_workbook(classe: Classe, absences: &[Absence]) -> Result<Vec<u8>, AppError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    let rows = sorted_for_export(absences.iter().filter(|a| a.classe == classe));
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(classe.as_str()).map_err(xlsx_error)?;
    write_absence_sheet(worksheet, &rows, &styles)?;

    workbook.save_to_buffer().map_err(xlsx_error)
}

/// Workbook with a summary sheet followed by one sheet per class that has absences.
pub fn all_classes_workbook(
    stats: &[ClassStatistic],
    absences: &[Absence],
) -> Result<Vec<u8>, AppError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET).map_err(xlsx_error)?;
    write_summary_sheet(summary, stats, &styles)?;

    for classe in ALL_CLASSES {
        let rows = sorted_for_export(absences.iter().filter(|a| a.classe == classe));
        if rows.is_empty() {
            continue;
        }
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(classe.as_str()).map_err(xlsx_error)?;
        write_absence_sheet(worksheet, &rows, &styles)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

/// Most recent absence date first. Rows whose date does not parse sink to the
/// bottom; ties keep the newest record first.
fn sorted_for_export<'a>(absences: impl Iterator<Item = &'a Absence>) -> Vec<&'a Absence> {
    let mut rows: Vec<&Absence> = absences.collect();
    rows.sort_by(|a, b| {
        parse_french_date(&b.date)
            .cmp(&parse_french_date(&a.date))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    rows
}

fn write_absence_sheet(
    worksheet: &mut Worksheet,
    rows: &[&Absence],
    styles: &Styles,
) -> Result<(), AppError> {
    for (col, header) in ABSENCE_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &styles.header)
            .map_err(xlsx_error)?;
    }

    for (index, absence) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        let format = if absence.is_unjustified() {
            &styles.unjustified
        } else {
            &styles.normal
        };

        let cells = [
            absence.date.as_str(),
            absence.nom.as_str(),
            absence.prenom.as_str(),
            absence.motif.as_str(),
            absence.justifie.as_str(),
            absence.remarques.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string_with_format(row, col as u16, *value, format)
                .map_err(xlsx_error)?;
        }
    }

    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;
    worksheet.autofit();
    Ok(())
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    stats: &[ClassStatistic],
    styles: &Styles,
) -> Result<(), AppError> {
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &styles.header)
            .map_err(xlsx_error)?;
    }

    for (index, stat) in stats.iter().enumerate() {
        let row = (index + 1) as u32;
        let unjustified_format = if stat.absences_non_justifiees > 0 {
            &styles.unjustified
        } else {
            &styles.normal
        };

        worksheet
            .write_string_with_format(row, 0, stat.classe.as_str(), &styles.normal)
            .map_err(xlsx_error)?;
        worksheet
            .write_number_with_format(row, 1, stat.total_absences as f64, &styles.normal)
            .map_err(xlsx_error)?;
        worksheet
            .write_number_with_format(
                row,
                2,
                stat.absences_non_justifiees as f64,
                unjustified_format,
            )
            .map_err(xlsx_error)?;
        worksheet
            .write_number_with_format(row, 3, stat.absences_recentes as f64, &styles.normal)
            .map_err(xlsx_error)?;
    }

    worksheet.autofit();
    Ok(())
}

fn xlsx_error(err: XlsxError) -> AppError {
    tracing::error!(error = %err, "spreadsheet generation failed");
    AppError::internal(format!("Échec de la génération du fichier Excel: {err}"))
}
