use integrity_common::record_type::RecordType;

#[derive(Clone)]
pub enum Msg {
    UeiChanged(String),
    AwardNumberChanged(String),
    RunLookup,
    SelectCandidate(usize),
    ChangeSelection,
    CompleteAward,
    SelectRecordType(RecordType),
    CompleteRecordType,
    DetailChanged(&'static str, String),
    CompleteDetails,
    FilesSelected,
    RemoveFile(String),
    ToggleAlsoTerminate(bool),
    ContinueToReview,
    BackToEdit,
    SetCertified(bool),
    Submit,
    SaveDraft,
    Cancel,
}
