use super::*;
use crate::draft::{DraftField, OptionField};

impl QuestionAdmin {
    pub fn open_add(&mut self) -> Result<(), AdminError> {
        if self.is_busy() {
            return Err(AdminError::Busy);
        }
        self.session = Some(EditSession::open_add());
        self.message.clear();
        Ok(())
    }

    pub fn open_edit(&mut self, id: &str) -> Result<(), AdminError> {
        if self.is_busy() {
            return Err(AdminError::Busy);
        }
        let question = self
            .store
            .get(id)
            .ok_or_else(|| AdminError::UnknownQuestion(id.to_string()))?;
        self.session = Some(EditSession::open_edit(question));
        self.message.clear();
        Ok(())
    }

    /// Drops the open form without touching the server.
    pub fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.close();
        }
    }

    /// The open form, unless a request is in flight; edits made then would
    /// be lost when the finishing save closes the form.
    fn session_mut(&mut self) -> Result<&mut EditSession, AdminError> {
        if self.is_busy() {
            return Err(AdminError::Busy);
        }
        self.session.as_mut().ok_or(AdminError::NoSession)
    }

    /// Whether the form's fields accept input.
    pub fn form_editable(&self) -> bool {
        self.session.is_some() && !self.is_busy()
    }

    pub fn set_field(&mut self, field: DraftField) -> Result<(), AdminError> {
        self.session_mut()?.set_field(field);
        Ok(())
    }

    pub fn add_option(&mut self) -> Result<(), AdminError> {
        self.session_mut()?.add_option();
        Ok(())
    }

    pub fn set_option(&mut self, index: usize, field: OptionField) -> Result<(), AdminError> {
        self.session_mut()?.set_option(index, field)?;
        Ok(())
    }

    pub fn remove_option(&mut self, index: usize) -> Result<(), AdminError> {
        self.session_mut()?.remove_option(index)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{FakeApi, admin_with, question};
    use crate::session::SessionMode;

    #[test]
    fn edit_requires_a_known_question() {
        let api = FakeApi::with_questions(vec![question("a")]);
        let mut admin = admin_with(&api);

        assert!(matches!(
            admin.open_edit("a"),
            Err(AdminError::UnknownQuestion(_))
        ));

        admin.refresh().unwrap();
        admin.wait();
        admin.open_edit("a").unwrap();
        assert_eq!(
            admin.session.as_ref().unwrap().mode,
            SessionMode::Edit { id: "a".into() }
        );
    }

    #[test]
    fn option_edits_without_a_form_fail() {
        let api = FakeApi::with_questions(vec![]);
        let mut admin = admin_with(&api);
        assert!(matches!(admin.add_option(), Err(AdminError::NoSession)));
        assert!(matches!(admin.save(), Err(AdminError::NoSession)));
    }

    #[test]
    fn out_of_range_option_surfaces_as_session_error() {
        let api = FakeApi::with_questions(vec![]);
        let mut admin = admin_with(&api);
        admin.open_add().unwrap();

        let err = admin
            .set_option(0, OptionField::Correct(true))
            .unwrap_err();

        assert!(matches!(err, AdminError::Session(_)));
    }

    #[test]
    fn close_session_makes_no_calls() {
        let api = FakeApi::with_questions(vec![]);
        let mut admin = admin_with(&api);
        admin.open_add().unwrap();
        admin.set_field(DraftField::Content("draft".into())).unwrap();

        admin.close_session();

        assert!(admin.session.is_none());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn forms_cannot_open_while_a_request_is_in_flight() {
        let api = FakeApi::with_questions(vec![]).gated();
        let mut admin = admin_with(&api);
        admin.refresh().unwrap();

        assert!(matches!(admin.open_add(), Err(AdminError::Busy)));

        api.release();
        admin.wait();
        assert!(admin.open_add().is_ok());
    }

    #[test]
    fn form_is_locked_while_its_save_is_in_flight() {
        let api = FakeApi::with_questions(vec![]).gated();
        let mut admin = admin_with(&api);
        admin.open_add().unwrap();
        admin.set_field(DraftField::Content("first".into())).unwrap();
        assert!(admin.form_editable());

        admin.save().unwrap();

        assert!(!admin.form_editable());
        assert!(matches!(
            admin.set_field(DraftField::Content("typed late".into())),
            Err(AdminError::Busy)
        ));
        assert!(matches!(admin.add_option(), Err(AdminError::Busy)));
        assert_eq!(admin.session.as_ref().unwrap().draft.content, "first");

        api.release();
        admin.wait();
        assert!(!admin.form_editable());
        assert_eq!(admin.questions()[0].content, "first");
    }
}
