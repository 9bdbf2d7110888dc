use crate::api::models::{WorkCode, status_label};
use crate::error::AppError;
use crate::utils::text::truncate_text_unicode;
use comfy_table::{Attribute, Cell, Color, Table, presets};
use crossterm::terminal;

/// Display color for each status code, indexed like the label table.
const STATUS_COLORS: [Color; 4] = [Color::DarkGrey, Color::Green, Color::Yellow, Color::Red];

fn status_color(status: u8) -> Color {
    STATUS_COLORS
        .get(status as usize)
        .copied()
        .unwrap_or(Color::White)
}

/// Formatter and utilities for table display
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Detect terminal width, clamped for stability
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                if width < 40 {
                    Some(40)
                } else if width > 200 {
                    Some(200)
                } else {
                    Some(width)
                }
            }
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render a work-code list in table format
    pub fn render_work_code_list(&self, records: &[WorkCode]) -> Result<String, AppError> {
        self.render_work_code_list_with_limit(records, None)
    }

    /// Render a work-code list in table format with a limit
    pub fn render_work_code_list_with_limit(
        &self,
        records: &[WorkCode],
        limit: Option<usize>,
    ) -> Result<String, AppError> {
        if records.is_empty() {
            return Ok("No work codes found.".to_string());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let headers = ["ID", "Short Code", "Cost Code", "Project Code", "Name", "Status"];
        if self.use_colors {
            let colored_headers: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
                .collect();
            table.set_header(colored_headers);
        } else {
            table.set_header(headers.to_vec());
        }

        let display_records = if let Some(limit_val) = limit {
            &records[..records.len().min(limit_val)]
        } else {
            records
        };

        let name_width = self.responsive_name_width();

        for record in display_records {
            let label = status_label(record.status).unwrap_or("Unknown");
            let row = vec![
                if self.use_colors {
                    Cell::new(record.id.to_string()).fg(Color::Cyan)
                } else {
                    Cell::new(record.id.to_string())
                },
                Cell::new(&record.short_work_code),
                Cell::new(&record.cost_code),
                Cell::new(&record.project_code),
                Cell::new(truncate_text_unicode(&record.name, name_width)),
                if self.use_colors {
                    Cell::new(label).fg(status_color(record.status))
                } else {
                    Cell::new(label)
                },
            ];
            table.add_row(row);
        }

        let mut output = table.to_string();

        // Omission note when the limit hides rows
        if let Some(limit_val) = limit {
            if records.len() > limit_val {
                let remaining = records.len() - limit_val;
                output.push_str(&format!(
                    "\n... and {} more work codes (use --full to see all)",
                    remaining
                ));
            }
        }

        Ok(output)
    }

    /// Render a single work code as a Field/Value table
    pub fn render_work_code_details(&self, record: &WorkCode) -> Result<String, AppError> {
        let mut table = Table::new();
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

        if self.use_colors {
            table.set_header(vec![
                Cell::new("Field")
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Green),
                Cell::new("Value")
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Green),
            ]);
        } else {
            table.set_header(vec![
                Cell::new("Field").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
            ]);
        }

        let status = status_label(record.status)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Unknown ({})", record.status));

        let fields = vec![
            ("ID", record.id.to_string()),
            ("Short Work Code", record.short_work_code.clone()),
            ("Cost Code", record.cost_code.clone()),
            ("Project Code", record.project_code.clone()),
            ("Name", record.name.clone()),
            (
                "Description",
                record.description.clone().unwrap_or_else(|| "N/A".to_string()),
            ),
            ("Status", status),
            ("Created At", self.format_datetime(record.created_at)),
            ("Updated At", self.format_datetime(record.updated_at)),
        ];

        for (field_name, field_value) in fields {
            let row = vec![
                if self.use_colors {
                    Cell::new(field_name).fg(Color::Yellow)
                } else {
                    Cell::new(field_name)
                },
                Cell::new(field_value),
            ];
            table.add_row(row);
        }

        Ok(table.to_string())
    }

    /// Set table width to match the terminal size
    fn configure_table_width(&self, table: &mut Table) {
        if let Some(terminal_width) = self.max_width {
            let available_width = if terminal_width > 20 {
                terminal_width - 6
            } else {
                terminal_width.max(40)
            };
            table.set_width(available_width as u16);
        } else {
            table.set_width(80);
        }
    }

    /// Name column budget based on terminal width
    fn responsive_name_width(&self) -> usize {
        let terminal_width = self.max_width.unwrap_or(80);
        if terminal_width < 60 {
            12
        } else if terminal_width < 100 {
            25
        } else {
            50
        }
    }

    fn format_datetime(&self, datetime: Option<chrono::DateTime<chrono::Utc>>) -> String {
        datetime
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(id: u32, short_work_code: &str, status: u8) -> WorkCode {
        WorkCode {
            id,
            short_work_code: short_work_code.to_string(),
            cost_code: "CC1".to_string(),
            project_code: "P01".to_string(),
            name: format!("Work code {}", id),
            description: Some("Test description".to_string()),
            status,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_table_display_creation() {
        let display = TableDisplay::new();
        assert!(display.use_colors);

        let display = TableDisplay::new().with_max_width(80).with_colors(false);
        assert_eq!(display.max_width, Some(80));
        assert!(!display.use_colors);
    }

    #[test]
    fn test_render_work_code_list() {
        let display = TableDisplay::new().with_max_width(120).with_colors(false);
        let records = vec![
            create_test_record(1, "AB1", 1),
            create_test_record(2, "XY9", 0),
        ];

        let result = display.render_work_code_list(&records);
        assert!(result.is_ok());

        let table_str = result.unwrap();
        assert!(table_str.contains("AB1"));
        assert!(table_str.contains("XY9"));
        assert!(table_str.contains("Active"));
        assert!(table_str.contains("Draft"));
    }

    #[test]
    fn test_render_empty_list() {
        let display = TableDisplay::new().with_colors(false);
        let result = display.render_work_code_list(&[]);
        assert_eq!(result.unwrap(), "No work codes found.");
    }

    #[test]
    fn test_render_list_with_limit_notes_omission() {
        let display = TableDisplay::new().with_max_width(120).with_colors(false);
        let records = vec![
            create_test_record(1, "AB1", 1),
            create_test_record(2, "AB2", 1),
            create_test_record(3, "AB3", 1),
        ];

        let table_str = display
            .render_work_code_list_with_limit(&records, Some(2))
            .unwrap();
        assert!(table_str.contains("AB1"));
        assert!(table_str.contains("AB2"));
        assert!(!table_str.contains("AB3"));
        assert!(table_str.contains("1 more work codes"));
    }

    #[test]
    fn test_render_work_code_details() {
        let display = TableDisplay::new().with_max_width(120).with_colors(false);
        let record = create_test_record(7, "AB1", 2);

        let table_str = display.render_work_code_details(&record).unwrap();
        assert!(table_str.contains("Short Work Code"));
        assert!(table_str.contains("AB1"));
        assert!(table_str.contains("On Hold"));
        assert!(table_str.contains("Test description"));
        assert!(table_str.contains("N/A")); // timestamps absent
    }

    #[test]
    fn test_status_color_lookup() {
        assert_eq!(status_color(0), Color::DarkGrey);
        assert_eq!(status_color(1), Color::Green);
        assert_eq!(status_color(2), Color::Yellow);
        assert_eq!(status_color(3), Color::Red);
        assert_eq!(status_color(9), Color::White);
    }
}
