use crate::{
    data::money::Money,
    error::{PaymentOutOfRangeSnafu, SmsResult},
};
use snafu::OptionExt;

pub type StudentId = u32;

///hands out student ids, starting at 1.
///
///each session owns its own sequence, so ids never leak between sessions (or tests)
#[derive(Debug, Default)]
pub struct StudentIdSequence {
    last: StudentId,
}

impl StudentIdSequence {
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    pub const fn next_id(&mut self) -> StudentId {
        self.last += 1;
        self.last
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    name: String,
    enrolled_courses: Vec<String>,
    balance: Money,
}

impl Student {
    pub fn create(name: impl Into<String>, ids: &mut StudentIdSequence) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            enrolled_courses: vec![],
            balance: Money::ZERO,
        }
    }

    pub const fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    pub const fn balance(&self) -> Money {
        self.balance
    }

    ///no duplicate check, the same course can be taken twice
    pub fn enroll(&mut self, course: impl Into<String>) {
        self.enrolled_courses.push(course.into());
    }

    ///the balance is left alone if the payment would push it past what an `f64` can hold
    pub fn pay(&mut self, amount: Money, currency: &str) -> SmsResult<String> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .context(PaymentOutOfRangeSnafu { amount })?;

        Ok(format!(
            "Thank you for your payment of {}. Remaining balance: {}",
            amount.with_symbol(currency),
            self.balance.with_symbol(currency)
        ))
    }

    pub fn view_balance(&self, currency: &str) -> String {
        format!("Current balance: {}", self.balance.with_symbol(currency))
    }

    pub fn show_status(&self, currency: &str) -> String {
        format!(
            "Student ID: {}\nName: {}\nEnrolled Courses: {}\nBalance: {}",
            self.id,
            self.name,
            self.enrolled_courses.join(", "),
            self.balance.with_symbol(currency)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmsError;

    #[test]
    fn ids_are_sequential_even_with_the_same_name() {
        let mut ids = StudentIdSequence::new();
        let created: Vec<_> = (0..5).map(|_| Student::create("Sam", &mut ids).id()).collect();
        assert_eq!(created, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn separate_sequences_do_not_share_state() {
        let mut first = StudentIdSequence::new();
        let mut second = StudentIdSequence::new();
        assert_eq!(Student::create("a", &mut first).id(), 1);
        assert_eq!(Student::create("b", &mut first).id(), 2);
        assert_eq!(Student::create("c", &mut second).id(), 1);
    }

    #[test]
    fn new_students_start_empty() {
        let student = Student::create("", &mut StudentIdSequence::new());
        assert_eq!(student.name(), "");
        assert!(student.enrolled_courses().is_empty());
        assert_eq!(student.balance(), Money::ZERO);
    }

    #[test]
    fn enroll_keeps_order_and_duplicates() {
        let mut student = Student::create("Ana", &mut StudentIdSequence::new());
        for course in ["Math101", "Bio200", "Math101"] {
            student.enroll(course);
        }
        assert_eq!(student.enrolled_courses(), ["Math101", "Bio200", "Math101"]);
    }

    #[test]
    fn pay_reports_amount_and_remaining_balance() {
        let mut student = Student::create("Ana", &mut StudentIdSequence::new());
        let msg = student.pay(Money::new(50.0), "$").unwrap();
        assert_eq!(
            msg,
            "Thank you for your payment of $50. Remaining balance: $-50"
        );
        assert_eq!(student.view_balance("$"), "Current balance: $-50");
    }

    #[test]
    fn negative_payment_raises_balance() {
        let mut student = Student::create("Ana", &mut StudentIdSequence::new());
        student.pay(Money::new(10.0), "$").unwrap();
        student.pay(Money::new(-25.5), "$").unwrap();
        assert_eq!(student.balance(), Money::new(15.5));
        assert_eq!(student.view_balance("$"), "Current balance: $15.5");
    }

    #[test]
    fn payment_that_overflows_leaves_balance_alone() {
        let mut student = Student::create("Ana", &mut StudentIdSequence::new());
        student.pay(Money::new(1e308), "$").unwrap();

        let err = student.pay(Money::new(1e308), "$").unwrap_err();
        assert!(matches!(err, SmsError::PaymentOutOfRange { .. }), "{err:?}");
        assert_eq!(student.balance(), Money::new(-1e308));
        assert_eq!(student.view_balance("$"), "Current balance: $-1e+308");
    }

    #[test]
    fn status_lists_fields_in_order() {
        let mut student = Student::create("Ana", &mut StudentIdSequence::new());
        assert_eq!(
            student.show_status("$"),
            "Student ID: 1\nName: Ana\nEnrolled Courses: \nBalance: $0"
        );

        student.enroll("Math101");
        student.enroll("Art1");
        student.pay(Money::new(50.0), "$").unwrap();
        assert_eq!(
            student.show_status("$"),
            "Student ID: 1\nName: Ana\nEnrolled Courses: Math101, Art1\nBalance: $-50"
        );
    }
}
