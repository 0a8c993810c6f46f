use crate::models::GolfCourse;

/// One table column: a header and a cell accessor.
pub struct Column<T> {
    /// Field name sent to the server when the column is sorted.
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn render(&self, row: &T) -> String {
        (self.cell)(row)
    }
}

/// Cells for every row, in column order.
pub fn render_rows<T>(columns: &[Column<T>], rows: &[T]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| columns.iter().map(|column| column.render(row)).collect())
        .collect()
}

pub fn golf_course_columns() -> Vec<Column<GolfCourse>> {
    vec![
        Column {
            id: "name",
            header: "Name",
            sortable: true,
            cell: |course| course.name.clone(),
        },
        Column {
            id: "id",
            header: "Course ID",
            sortable: false,
            cell: |course| course.id.display_or_na(),
        },
        Column {
            id: "properties",
            header: "Course Type",
            sortable: false,
            cell: course_type,
        },
        Column {
            id: "points_of_interest",
            header: "POIs",
            sortable: false,
            cell: |course| match course.points_of_interest.len() {
                0 => "None".to_string(),
                1 => "1 POI".to_string(),
                count => format!("{count} POIs"),
            },
        },
        Column {
            id: "properties.operator",
            header: "Operator",
            sortable: false,
            cell: |course| course.operator().unwrap_or_else(|| "N/A".to_string()),
        },
        Column {
            id: "properties.website",
            header: "Website",
            sortable: false,
            cell: |course| course.website().unwrap_or_else(|| "None".to_string()),
        },
    ]
}

fn course_type(course: &GolfCourse) -> String {
    let holes = course.holes().unwrap_or_else(|| "N/A".to_string());
    match course.par() {
        Some(par) => format!("{holes} holes, Par {par}"),
        None => format!("{holes} holes"),
    }
}
