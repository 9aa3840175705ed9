use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of draft fields so error state stays exhaustiveness-checkable
/// instead of being keyed by free-form strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FullName,
    DateOfBirth,
    Gender,
    MobileNumber,
    Email,
    GovernmentIdType,
    GovernmentIdNumber,
    BloodGroup,
    FirstDonation,
    LastDonationDate,
    Weight,
    HasChronicDisease,
    ChronicDiseases,
    OnMedication,
    RecentSurgery,
    InfectiousDiseases,
    State,
    District,
    City,
    Pincode,
    DonationRadius,
    AvailableDays,
    ContactMethod,
    EmergencyDonation,
    ConsentAccuracy,
    ConsentContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

/// Yes/No selects from the health questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DonationRadius {
    #[serde(rename = "10")]
    Km10,
    #[serde(rename = "20")]
    Km20,
    #[serde(rename = "50")]
    Km50,
}

impl DonationRadius {
    pub fn kilometers(self) -> u8 {
        match self {
            DonationRadius::Km10 => 10,
            DonationRadius::Km20 => 20,
            DonationRadius::Km50 => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AvailableDay {
    Weekdays,
    Weekends,
    Anytime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContactMethod {
    Phone,
    #[serde(rename = "SMS")]
    Sms,
    WhatsApp,
    Email,
}

/// Government identity document types accepted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernmentIdKind {
    Aadhaar,
    VoterId,
    DrivingLicense,
}

/// The in-progress registration record, accumulated field-by-field across
/// the wizard. Every field stays optional until the step that needs it is
/// validated; `government_id_number` always holds the already-formatted
/// display string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    pub government_id_type: Option<GovernmentIdKind>,
    pub government_id_number: Option<String>,
    pub blood_group: Option<BloodGroup>,
    pub first_donation: Option<YesNo>,
    pub last_donation_date: Option<NaiveDate>,
    pub weight: Option<f32>,
    pub has_chronic_disease: Option<YesNo>,
    pub chronic_diseases: BTreeSet<String>,
    pub on_medication: Option<YesNo>,
    pub recent_surgery: Option<YesNo>,
    pub infectious_diseases: Option<YesNo>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub donation_radius: Option<DonationRadius>,
    pub available_days: BTreeSet<AvailableDay>,
    pub contact_method: Option<ContactMethod>,
    pub emergency_donation: Option<bool>,
    pub consent_accuracy: bool,
    pub consent_contact: bool,
}

/// One typed field edit. Keeping the patch a closed union means a draft can
/// never grow a field the validators do not know about.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftPatch {
    FullName(String),
    DateOfBirth(Option<NaiveDate>),
    Gender(Gender),
    MobileNumber(String),
    Email(String),
    GovernmentIdType(Option<GovernmentIdKind>),
    GovernmentIdNumber(String),
    BloodGroup(BloodGroup),
    FirstDonation(YesNo),
    LastDonationDate(Option<NaiveDate>),
    Weight(Option<f32>),
    HasChronicDisease(YesNo),
    ChronicDiseases(BTreeSet<String>),
    OnMedication(YesNo),
    RecentSurgery(YesNo),
    InfectiousDiseases(YesNo),
    State(String),
    District(String),
    City(String),
    Pincode(String),
    DonationRadius(DonationRadius),
    AvailableDays(BTreeSet<AvailableDay>),
    ContactMethod(ContactMethod),
    EmergencyDonation(bool),
    ConsentAccuracy(bool),
    ConsentContact(bool),
}

impl DraftPatch {
    pub fn key(&self) -> FieldKey {
        match self {
            DraftPatch::FullName(_) => FieldKey::FullName,
            DraftPatch::DateOfBirth(_) => FieldKey::DateOfBirth,
            DraftPatch::Gender(_) => FieldKey::Gender,
            DraftPatch::MobileNumber(_) => FieldKey::MobileNumber,
            DraftPatch::Email(_) => FieldKey::Email,
            DraftPatch::GovernmentIdType(_) => FieldKey::GovernmentIdType,
            DraftPatch::GovernmentIdNumber(_) => FieldKey::GovernmentIdNumber,
            DraftPatch::BloodGroup(_) => FieldKey::BloodGroup,
            DraftPatch::FirstDonation(_) => FieldKey::FirstDonation,
            DraftPatch::LastDonationDate(_) => FieldKey::LastDonationDate,
            DraftPatch::Weight(_) => FieldKey::Weight,
            DraftPatch::HasChronicDisease(_) => FieldKey::HasChronicDisease,
            DraftPatch::ChronicDiseases(_) => FieldKey::ChronicDiseases,
            DraftPatch::OnMedication(_) => FieldKey::OnMedication,
            DraftPatch::RecentSurgery(_) => FieldKey::RecentSurgery,
            DraftPatch::InfectiousDiseases(_) => FieldKey::InfectiousDiseases,
            DraftPatch::State(_) => FieldKey::State,
            DraftPatch::District(_) => FieldKey::District,
            DraftPatch::City(_) => FieldKey::City,
            DraftPatch::Pincode(_) => FieldKey::Pincode,
            DraftPatch::DonationRadius(_) => FieldKey::DonationRadius,
            DraftPatch::AvailableDays(_) => FieldKey::AvailableDays,
            DraftPatch::ContactMethod(_) => FieldKey::ContactMethod,
            DraftPatch::EmergencyDonation(_) => FieldKey::EmergencyDonation,
            DraftPatch::ConsentAccuracy(_) => FieldKey::ConsentAccuracy,
            DraftPatch::ConsentContact(_) => FieldKey::ConsentContact,
        }
    }
}

/// Per-field error messages; an absent key means the field is currently
/// valid. A field's entry is dropped the instant its value changes and only
/// reappears on the next step-advance or submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<FieldKey, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldKey, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FieldKey) {
        self.fields.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.fields.clear();
    }

    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.fields.iter().map(|(key, message)| (*key, message.as_str()))
    }
}
