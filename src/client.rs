//! Blocking client for the SAURES metering API.
//!
//! One method per remote operation. Every method builds its parameter
//! list, issues a single GET (query string) or POST (form body), and
//! returns the service's `{data, errors, status}` envelope untouched.

use chrono::NaiveDateTime;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::agent;
use crate::error::Error;
use crate::params::{self, Params};
use crate::response::ApiResponse;
use crate::types::{
    Group, MeterCommand, NewObject, NoticeSetup, ScheduleSetup, SensorInput,
};

/// Production API root.
const API_BASE_URL: &str = "https://api.saures.ru/1.0";

/// Blocking client for the SAURES metering API.
///
/// Holds the credentials and, after [`login`](Self::login), the session
/// token (`sid`) that every other operation forwards. Tokens expire 15
/// minutes after issue, enforced entirely server-side: the client does not
/// track the window, and an expired session comes back as an ordinary
/// `status: "bad"` envelope. Re-login policy is the caller's decision.
///
/// The instance is not meant for concurrent use — `login` replaces the
/// token through `&mut self`, so sharing a client across threads requires
/// external synchronization.
///
/// The service rate-limits at roughly 10 calls per minute; the client does
/// not queue, retry, or throttle on the caller's behalf.
pub struct SauresClient {
    http: Client,
    base_url: String,
    email: Option<String>,
    password: Option<String>,
    sid: Option<String>,
}

impl SauresClient {
    /// Create a client against the production API.
    ///
    /// Credentials are optional and unvalidated; no network I/O happens
    /// here. Only [`login`](Self::login) and
    /// [`user_register`](Self::user_register) use them.
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, Error> {
        Self::with_base_url(API_BASE_URL, email, password)
    }

    /// Create a client against an alternate API root.
    pub fn with_base_url(
        base_url: impl Into<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, Error> {
        let http = Client::builder().user_agent(agent::generate()).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email,
            password,
            sid: None,
        })
    }

    /// Session token issued by the last successful [`login`](Self::login),
    /// if any.
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    // ===== Generic request plumbing =====

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Starting parameter list for authenticated operations. Before a
    /// successful login there is no token and no `sid` key is sent; the
    /// service answers such calls with its own error envelope.
    fn authed(&self) -> Params {
        Params::new().push_opt("sid", self.sid.as_ref())
    }

    fn get(&self, path: &str, query: Params) -> Result<ApiResponse, Error> {
        debug!(path, "sending GET request");
        let body = self
            .http
            .get(self.url(path))
            .query(query.pairs())
            .send()?
            .text()?;
        parse_envelope(&body)
    }

    fn post(&self, path: &str, form: Params) -> Result<ApiResponse, Error> {
        debug!(path, "sending POST request");
        let body = self
            .http
            .post(self.url(path))
            .form(form.pairs())
            .send()?
            .text()?;
        parse_envelope(&body)
    }

    // ===== User operations =====

    /// Authorize and capture the session token from `data.sid`.
    ///
    /// On an application-level failure (`status: "bad"`, no `data.sid`)
    /// the envelope is returned as-is and any previously held token is
    /// kept.
    pub fn login(&mut self) -> Result<ApiResponse, Error> {
        let form = Params::new()
            .push_opt("email", self.email.as_ref())
            .push_opt("password", self.password.as_ref());
        let response = self.post("login", form)?;

        match response.data.get("sid").and_then(|v| v.as_str()) {
            Some(sid) => self.sid = Some(sid.to_string()),
            None => warn!("login response carried no data.sid"),
        }
        Ok(response)
    }

    /// Account parameters.
    pub fn user_profile(&self) -> Result<ApiResponse, Error> {
        self.get("user/profile", self.authed())
    }

    /// Change account settings. The stored email and password accompany
    /// the edited fields, as the endpoint requires.
    ///
    /// `phone` format: `+7XXXXXXXXXX` or `+7 (XXX) XXX-XX-XX`.
    pub fn user_profile_edit(
        &self,
        firstname: &str,
        lastname: &str,
        phone: &str,
    ) -> Result<ApiResponse, Error> {
        let form = self
            .authed()
            .push_opt("email", self.email.as_ref())
            .push("firstname", firstname)
            .push("lastname", lastname)
            .push("phone", phone)
            .push_opt("password", self.password.as_ref());
        self.post("user/profile", form)
    }

    /// Objects (metering sites) linked to the account.
    pub fn user_objects(&self) -> Result<ApiResponse, Error> {
        self.get("user/objects", self.authed())
    }

    /// Register a new account under the stored email and password.
    pub fn user_register(
        &self,
        phone: &str,
        firstname: Option<&str>,
        lastname: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let form = Params::new()
            .push_opt("email", self.email.as_ref())
            .push_opt("password", self.password.as_ref())
            .push("phone", phone)
            .push_opt("firstname", firstname)
            .push_opt("lastname", lastname);
        self.post("user/register", form)
    }

    // ===== Object operations =====

    /// Current readings of an object's meters, optionally as of a past
    /// point in time.
    pub fn object_meters(
        &self,
        id: i64,
        date: Option<NaiveDateTime>,
    ) -> Result<ApiResponse, Error> {
        let query = self
            .authed()
            .push("id", id)
            .push_opt("date", date.map(params::datetime));
        self.get("object/meters", query)
    }

    /// Add an object (metering site).
    pub fn object_add(&self, object: &NewObject) -> Result<ApiResponse, Error> {
        let form = self
            .authed()
            .push("city", &object.city)
            .push("street", &object.street)
            .push("building", &object.building)
            .push("utc", object.utc)
            .push_opt("number", object.number.as_ref())
            .push_opt("type", object.object_type)
            .push_opt("install_inn", object.install_inn)
            .push_opt("management_inn", object.management_inn)
            .push_opt("personal_account", object.personal_account.as_ref())
            .push_opt("account_id", object.account_id.as_ref());
        self.post("object/add", form)
    }

    /// Object event log, paginated: `page` number and `step` records per
    /// page.
    pub fn object_journal(&self, id: i64, page: u32, step: u32) -> Result<ApiResponse, Error> {
        let query = self.authed().push("id", id).push("page", page).push("step", step);
        self.get("object/journal", query)
    }

    /// Payment transactions of an object, paginated like
    /// [`object_journal`](Self::object_journal).
    pub fn object_payments(&self, id: i64, page: u32, step: u32) -> Result<ApiResponse, Error> {
        let query = self.authed().push("id", id).push("page", page).push("step", step);
        self.get("object/payments", query)
    }

    /// Reading-transmission schedules of an object.
    pub fn object_schedule(&self, id: i64) -> Result<ApiResponse, Error> {
        self.get("object/schedule", self.authed().push("id", id))
    }

    /// Create, edit, or delete a reading-transmission schedule; see
    /// [`ScheduleSetup`] for how the service tells the intents apart.
    pub fn object_schedule_setup(&self, setup: &ScheduleSetup) -> Result<ApiResponse, Error> {
        let form = self
            .authed()
            .push("type", setup.kind)
            .push("day", setup.day)
            .push("time", params::clock(setup.time))
            .push("personal_account", &setup.personal_account)
            .push("fraction", u8::from(setup.fraction))
            .push("receiver", &setup.receiver)
            .push("resource", setup.resource)
            .push("object_id", setup.object_id)
            .push_opt("id", setup.id)
            .push_opt("signature", setup.signature.as_ref())
            .push_opt("delete", setup.delete);
        self.post("object/schedule", form)
    }

    /// Notification settings of an object.
    pub fn object_notice(&self, id: i64) -> Result<ApiResponse, Error> {
        self.get("object/notice", self.authed().push("id", id))
    }

    /// Create, edit, or delete a notification; see [`NoticeSetup`].
    pub fn object_notice_setup(&self, setup: &NoticeSetup) -> Result<ApiResponse, Error> {
        let form = self
            .authed()
            .push("type", setup.kind)
            .push("dispatch", setup.dispatch)
            .push("receiver", &setup.receiver)
            .push_opt("id", setup.id)
            .push_opt("object_id", setup.object_id)
            .push_opt("delete", setup.delete);
        self.post("object/notice", form)
    }

    // ===== Meter operations =====

    /// Readings of one device over a period, grouped by [`Group`].
    ///
    /// `absolute` selects absolute values over flow rate and is always
    /// sent, `false` included — the service's default-suppression rules
    /// apply to value parameters only, not boolean flags.
    pub fn meter_history(
        &self,
        id: i64,
        start: NaiveDateTime,
        finish: NaiveDateTime,
        group: Group,
        absolute: bool,
    ) -> Result<ApiResponse, Error> {
        let query = self
            .authed()
            .push("id", id)
            .push("start", params::datetime(start))
            .push("finish", params::datetime(finish))
            .push("group", group)
            .push("absolute", absolute);
        self.get("meter/get", query)
    }

    /// Crane and relay control.
    pub fn meter_control(&self, id: i64, command: MeterCommand) -> Result<ApiResponse, Error> {
        let form = self.authed().push("id", id).push("command", command);
        self.post("meter/control", form)
    }

    /// Device types known to the system.
    pub fn meter_types(&self) -> Result<ApiResponse, Error> {
        self.get("meter/types", self.authed())
    }

    /// Edit a device. `approve_dt` is the datetime of the next
    /// verification / replacement / service.
    pub fn meter_save(
        &self,
        id: i64,
        name: &str,
        sn: &str,
        approve_dt: NaiveDateTime,
        eirc_num: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let form = self
            .authed()
            .push("id", id)
            .push("name", name)
            .push("sn", sn)
            .push("approve_dt", params::datetime(approve_dt))
            .push_opt("eirc_num", eirc_num);
        self.post("meter/save", form)
    }

    // ===== Sensor operations =====

    /// Step one of adding a controller to an object: query its unbound
    /// input slots by serial number.
    pub fn sensor_add_begin(&self, sn: &str) -> Result<ApiResponse, Error> {
        self.get("sensor/add", self.authed().push("sn", sn))
    }

    /// Step two of adding a controller: bind the inputs discovered by
    /// [`sensor_add_begin`](Self::sensor_add_begin).
    ///
    /// Each entry contributes a `<entrance_number>_name` and a
    /// `<entrance_number>_sn` field, in caller order. This is the one
    /// operation whose field names are data-driven.
    pub fn sensor_add_complete(
        &self,
        sn: &str,
        object_id: i64,
        devices: &[SensorInput],
    ) -> Result<ApiResponse, Error> {
        let mut form = self.authed().push("sn", sn).push("object_id", object_id);
        for device in devices {
            form = form
                .push(format!("{}_name", device.entrance_number), &device.name)
                .push(format!("{}_sn", device.entrance_number), &device.sn);
        }
        self.post("sensor/add", form)
    }

    /// Edit a controller.
    ///
    /// `check_hours` is the no-connection alarm period (service default
    /// 72 when omitted); `new_firmware` schedules a firmware update, or
    /// cancels one when empty.
    pub fn sensor_settings(
        &self,
        sn: &str,
        name: &str,
        check_hours: Option<u32>,
        new_firmware: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let form = self
            .authed()
            .push("sn", sn)
            .push("name", name)
            .push_opt("check_hours", check_hours)
            .push_opt("new_firmware", new_firmware);
        self.post("sensor/settings", form)
    }
}

fn parse_envelope(body: &str) -> Result<ApiResponse, Error> {
    serde_json::from_str(body).map_err(|e| Error::decode(e, body))
}
