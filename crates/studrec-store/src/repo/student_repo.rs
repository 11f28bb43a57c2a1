//! SQLite repository for student rows
//!
//! Row-level CRUD against the `students` table. Each function is a single
//! statement on a borrowed connection; scoping the connection per call is the
//! gateway's job.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use studrec_core::Student;

/// SQLite repository for Students
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new row
    ///
    /// Returns `Ok(true)` iff no row with that id pre-existed. A primary-key
    /// conflict is the expected duplicate outcome and maps to `Ok(false)`,
    /// leaving the stored row untouched; any other SQLite fault propagates.
    pub fn create(conn: &Connection, student: &Student) -> Result<bool> {
        let result = conn.execute(
            "INSERT INTO students (id, pib, address, faculty, email)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                student.id,
                student.pib,
                student.address,
                student.faculty,
                student.email,
            ],
        );

        match result {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Ok(false)
            }
            Err(e) => Err(from_rusqlite(e)),
        }
    }

    /// Get a Student by id
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Student>> {
        let mut stmt = conn
            .prepare("SELECT id, pib, address, faculty, email FROM students WHERE id = ?1")
            .map_err(from_rusqlite)?;

        let result = stmt
            .query_row([id], |row| {
                let id: i64 = row.get(0)?;
                let pib: String = row.get(1)?;
                let address: Option<String> = row.get(2)?;
                let faculty: Option<String> = row.get(3)?;
                let email: Option<String> = row.get(4)?;

                Ok(Student::with_details(
                    id,
                    pib,
                    address.unwrap_or_default(),
                    faculty.unwrap_or_default(),
                    email.unwrap_or_default(),
                ))
            })
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Overwrite pib/address/faculty/email for the row matching `student.id`
    ///
    /// Returns `Ok(true)` iff a row was matched. The id column is never
    /// altered.
    pub fn update(conn: &Connection, student: &Student) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE students
                 SET pib = ?2, address = ?3, faculty = ?4, email = ?5
                 WHERE id = ?1",
                rusqlite::params![
                    student.id,
                    student.pib,
                    student.address,
                    student.faculty,
                    student.email,
                ],
            )
            .map_err(from_rusqlite)?;

        Ok(changed > 0)
    }

    /// Remove the row matching id
    ///
    /// Returns `Ok(true)` iff a row existed and was removed.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM students WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        Ok(removed > 0)
    }
}
