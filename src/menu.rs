// 🖥️ Console Menu - line-oriented front-end over the registry
//
// Role selection (Doctor / Patient / Exit) with one sub-menu per role.
// Generic over the reader and writer so sessions can be scripted in tests.
// Registry errors come back as values; this layer decides what to print
// and whether a follow-up save happens.

use crate::appointment::AppointmentError;
use crate::entities::Admin;
use crate::registry::{AppointmentSystem, Listing};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

const ADMIN_ID: &str = "A1";
const ADMIN_NAME: &str = "Admin";

/// Where a sub-menu hands control back to
enum Flow {
    Back,
    EndOfInput,
}

pub struct Console<R, W> {
    system: AppointmentSystem,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(system: AppointmentSystem, input: R, output: W) -> Self {
        Console {
            system,
            input,
            output,
        }
    }

    pub fn system(&self) -> &AppointmentSystem {
        &self.system
    }

    pub fn into_parts(self) -> (AppointmentSystem, W) {
        (self.system, self.output)
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Medical Appointment System")?;
        writeln!(self.output)?;

        loop {
            writeln!(self.output, "Are you a:")?;
            writeln!(self.output, "1. Doctor\n2. Patient\n3. Exit")?;
            let Some(choice) = self.prompt("Choose option (1, 2, or 3): ")? else {
                return self.exit();
            };

            let flow = match choice.as_str() {
                "1" => self.doctor_menu()?,
                "2" => self.patient_menu()?,
                "3" => return self.exit(),
                _ => {
                    writeln!(self.output, "Invalid role choice. Please enter 1, 2, or 3.")?;
                    Flow::Back
                }
            };

            if let Flow::EndOfInput = flow {
                return self.exit();
            }
        }
    }

    // ========================================================================
    // DOCTOR MENU
    // ========================================================================

    fn doctor_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "\nDoctor Menu:")?;
            writeln!(self.output, "1. Register a Doctor")?;
            writeln!(self.output, "2. Show All Appointments")?;
            writeln!(self.output, "3. Complete Appointment")?;
            writeln!(self.output, "4. Remove a Doctor")?;
            writeln!(self.output, "5. Exit")?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                return Ok(Flow::EndOfInput);
            };

            match choice.as_str() {
                "1" => {
                    let Some(name) = self.prompt("Enter Doctor Name: ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    match self.system.register_doctor(&name) {
                        Ok(id) => writeln!(self.output, "Doctor registered with ID: {}", id)?,
                        Err(e) => writeln!(self.output, "Error: {}", e)?,
                    }
                }
                "2" => {
                    let Some(id) = self.prompt("Enter your Doctor ID (e.g., D1001): ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    let listing = self.system.show_appointments_by_doctor_id(&id);
                    self.print_listing(&listing)?;
                }
                "3" => {
                    let listing = self.system.show_all_appointments();
                    self.print_listing(&listing)?;
                    let Some(raw) = self.prompt("Enter appointment index to complete: ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    self.complete_by_index(&raw)?;
                }
                "4" => {
                    let Some(id) = self.prompt("Enter Doctor ID to remove (e.g., D1001): ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    let admin = Admin::new(ADMIN_ID, ADMIN_NAME)?;
                    let doctor_id = Some(id.as_str()).filter(|id| !id.is_empty());
                    let outcome = self.system.remove_doctor(&admin, doctor_id);
                    writeln!(self.output, "{}", outcome)?;
                }
                "5" => {
                    writeln!(self.output, "Going back to main menu!!")?;
                    return Ok(Flow::Back);
                }
                _ => writeln!(self.output, "Invalid choice. Please enter a number from 1 to 5.")?,
            }
        }
    }

    fn complete_by_index(&mut self, raw: &str) -> Result<()> {
        let Ok(index) = raw.parse::<i64>() else {
            writeln!(self.output, "Invalid index. Must be a number.")?;
            return Ok(());
        };

        let result = usize::try_from(index)
            .map_err(|_| AppointmentError::NegativeIndex(index))
            .and_then(|index| self.system.complete_appointment(index));

        match result {
            Ok(()) => {
                writeln!(self.output, "Appointment marked completed.")?;
                self.save()?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    // ========================================================================
    // PATIENT MENU
    // ========================================================================

    fn patient_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.output, "\nPatient Menu:")?;
            writeln!(self.output, "1. Register a Patient")?;
            writeln!(self.output, "2. Show All Doctors")?;
            writeln!(self.output, "3. Book Appointment")?;
            writeln!(self.output, "4. Show Appointments")?;
            writeln!(self.output, "5. Exit")?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                return Ok(Flow::EndOfInput);
            };

            match choice.as_str() {
                "1" => {
                    let Some(name) = self.prompt("Enter Patient Name: ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    match self.system.register_patient(&name) {
                        Ok(id) => writeln!(self.output, "Patient registered with ID: {}", id)?,
                        Err(e) => writeln!(self.output, "Error: {}", e)?,
                    }
                }
                "2" => {
                    let listing = self.system.show_all_doctors();
                    self.print_listing(&listing)?;
                }
                "3" => {
                    let Some(digits) =
                        self.prompt("Enter Numeric Patient ID (digits only, without 'P'): ")?
                    else {
                        return Ok(Flow::EndOfInput);
                    };
                    self.book_for(&digits)?;
                }
                "4" => {
                    let Some(id) = self.prompt("Enter your Patient ID (e.g., P1001): ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    let listing = self.system.show_appointments_by_patient_id(&id);
                    self.print_listing(&listing)?;
                }
                "5" => {
                    writeln!(self.output, "Going back to main menu!!")?;
                    return Ok(Flow::Back);
                }
                _ => writeln!(self.output, "Invalid choice. Please enter a number from 1 to 5.")?,
            }
        }
    }

    fn book_for(&mut self, digits: &str) -> Result<()> {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            writeln!(self.output, "Invalid ID: Must contain only numbers.")?;
            return Ok(());
        }

        let Some(patient) = self.system.find_patient_by_id(&format!("P{}", digits)) else {
            writeln!(self.output, "Patient not found.")?;
            return Ok(());
        };

        // A failed booking skips the save
        let booked = self.system.book_appointment(&patient).map(|_| ());
        match booked {
            Ok(()) => {
                writeln!(self.output, "Appointment booked.")?;
                self.save()?;
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn save(&mut self) -> Result<()> {
        match self.system.save_appointments_to_file() {
            Ok(_) => writeln!(self.output, "Appointments saved to file.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting......, Thank You!")?;

        match self.system.clear_all_contents_of_the_file() {
            Ok(()) => writeln!(self.output, "File contents cleared successfully.")?,
            Err(e) => writeln!(
                self.output,
                "An error occurred while clearing the file: {}",
                e
            )?,
        }

        let summary = serde_json::to_string(&self.system.summary())?;
        info!(%summary, "session ended");
        self.output.flush()?;
        Ok(())
    }

    fn print_listing(&mut self, listing: &Listing) -> Result<()> {
        writeln!(self.output, "{}", listing)?;
        Ok(())
    }

    /// Print `label`, read one line. `None` means the input is exhausted.
    ///
    /// Only the line terminator is stripped, so answers are compared exactly
    /// as typed. Bytes that are not UTF-8 become U+FFFD and fail validation
    /// like any other bad input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
