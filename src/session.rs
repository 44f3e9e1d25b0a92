use crate::{
    config::RuntimeConfiguration,
    console::Console,
    data::{
        money::Money,
        student::{Student, StudentIdSequence},
    },
    error::SmsResult,
    menu::{MENU_TEXT, MenuChoice},
};
use std::ops::ControlFlow;

pub const BANNER: &str = "Student Management System";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid option.";

///one run of the program, from asking for a name to picking "Exit"
#[derive(Debug)]
pub struct Session<C> {
    console: C,
    config: RuntimeConfiguration,
    ids: StudentIdSequence,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, config: RuntimeConfiguration) -> Self {
        Self {
            console,
            config,
            ids: StudentIdSequence::new(),
        }
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }

    ///runs the whole session, then closes the console regardless of how it went.
    ///
    ///returns `None` if input ran out before anyone gave a name
    pub async fn run(&mut self) -> SmsResult<Option<Student>> {
        let outcome = self.menu_loop().await;
        let closed = self.console.close().await;

        let student = outcome?;
        closed?;
        Ok(student)
    }

    async fn menu_loop(&mut self) -> SmsResult<Option<Student>> {
        if self.config.show_banner() {
            self.console.print(BANNER).await?;
            self.console.print("").await?;
        }

        let Some(name) = self.console.prompt("Enter student name: ").await? else {
            info!("Input ended before a student was created");
            return Ok(None);
        };

        let mut student = Student::create(name, &mut self.ids);
        info!(id = student.id(), "Student created");

        self.console
            .print(&format!("Student ID: {}", student.id()))
            .await?;
        self.console.print("Student created successfully.").await?;
        self.console.print("").await?;

        loop {
            self.console.print(MENU_TEXT).await?;

            let Some(raw) = self.console.prompt("Enter your choice: ").await? else {
                info!("Input ended, finishing session");
                break;
            };

            let Ok(choice) = raw.parse::<MenuChoice>() else {
                debug!(?raw, "Invalid menu choice");
                self.console.print(INVALID_CHOICE).await?;
                self.console.print("").await?;
                continue;
            };

            debug!(?choice, "Dispatching menu choice");
            if self.dispatch(choice, &mut student).await?.is_break() {
                break;
            }
        }

        Ok(Some(student))
    }

    async fn dispatch(
        &mut self,
        choice: MenuChoice,
        student: &mut Student,
    ) -> SmsResult<ControlFlow<()>> {
        let currency = self.config.currency_symbol();

        match choice {
            MenuChoice::Enroll => {
                let Some(course) = self.console.prompt("Enter course name: ").await? else {
                    return Ok(ControlFlow::Break(()));
                };
                let message = format!("Enrolled in {course} successfully.");
                student.enroll(course);

                self.console.print(&message).await?;
                self.console.print("").await?;
            }
            MenuChoice::ViewBalance => {
                self.console.print(&student.view_balance(currency)).await?;
            }
            MenuChoice::PayTuition => {
                let Some(raw) = self.console.prompt("Enter payment amount: ").await? else {
                    return Ok(ControlFlow::Break(()));
                };

                //both of these only ever fail with something worth telling the user about
                match Money::parse_amount(&raw).and_then(|amount| student.pay(amount, currency)) {
                    Ok(receipt) => {
                        debug!(balance = %student.balance(), "Payment taken");
                        self.console.print(&receipt).await?;
                    }
                    Err(e) => {
                        warn!(?e, "Rejected payment");
                        self.console.print(&e.to_string()).await?;
                        self.console.print("").await?;
                    }
                }
            }
            MenuChoice::ShowStatus => {
                self.console.print(&student.show_status(currency)).await?;
            }
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }
}
