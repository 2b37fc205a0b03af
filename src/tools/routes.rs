//! Static routing table
//!
//! Every remote endpoint is identified by an HTTP [`Verb`] and a logical
//! [`Resource`] whose path template carries `{}` positional placeholders
//! for the parent/child identifiers.

use crate::client_error::ClientError;
use std::fmt;
use std::str::FromStr;

/// A positional path parameter: a numeric id, a language code or an
/// attribute name.
pub type PathParam<'a> = &'a (dyn fmt::Display + Sync);

/// HTTP verb of an API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    /// Server-side duplication of pages, elements, option lists and records.
    Copy,
}

impl Verb {
    /// Returns the upper-case HTTP method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Copy => "COPY",
        }
    }

    /// Converts the verb into a reqwest method.
    pub fn method(&self) -> reqwest::Method {
        reqwest::Method::from_str(self.as_str()).unwrap_or(reqwest::Method::GET)
    }
}

impl FromStr for Verb {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "delete" => Ok(Verb::Delete),
            "copy" => Ok(Verb::Copy),
            other => Err(ClientError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! resources {
    ($($name:ident => $template:literal,)*) => {
        /// Logical resource names of the iFormBuilder API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Resource {
            $($name,)*
        }

        impl Resource {
            /// Every resource in routing table order.
            pub const ALL: &'static [Resource] = &[$(Resource::$name,)*];

            /// Returns the resource name as used in operation names.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Resource::$name => stringify!($name),)*
                }
            }

            /// Returns the URL path template, relative to the API host.
            pub fn template(&self) -> &'static str {
                match self {
                    $(Resource::$name => $template,)*
                }
            }
        }
    };
}

resources! {
    Profiles => "profiles",
    Profile => "profiles/{}",
    HomeProfile => "profiles/self",

    CompanyInfo => "profiles/{}/company_info",

    Users => "profiles/{}/users",
    User => "profiles/{}/users/{}",

    UserPageAssignments => "profiles/{}/users/{}/page_assignments",
    UserPageAssignment => "profiles/{}/users/{}/page_assignments/{}",

    UserRecordAssignments => "profiles/{}/users/{}/record_assignments",
    UserRecordAssignment => "profiles/{}/users/{}/record_assignments/{}",

    UserGroups => "profiles/{}/user_groups",
    UserGroup => "profiles/{}/user_groups/{}",

    UserGroupUserAssignments => "profiles/{}/user_groups/{}/users",
    UserGroupUserAssignment => "profiles/{}/user_groups/{}/users/{}",

    UserGroupPageAssignments => "profiles/{}/user_groups/{}/page_assignments",
    UserGroupPageAssignment => "profiles/{}/user_groups/{}/page_assignments/{}",

    Pages => "profiles/{}/pages",
    Page => "profiles/{}/pages/{}",

    PageFeed => "profiles/{}/pages/{}/feed",

    PageLocalizations => "profiles/{}/pages/{}/localizations",
    PageLocalization => "profiles/{}/pages/{}/localizations/{}",

    PageUserAssignments => "profiles/{}/pages/{}/assignments",
    PageUserAssignment => "profiles/{}/pages/{}/assignments/{}",

    PageRecordAssignments => "profiles/{}/pages/{}/record_assignments",
    PageRecordAssignment => "profiles/{}/pages/{}/record_assignments/{}",

    PageEndpoints => "profiles/{}/pages/{}/http_callbacks",
    PageEndpoint => "profiles/{}/pages/{}/http_callbacks/{}",

    PageEmailAlerts => "profiles/{}/pages/{}/email_alerts",

    PageTriggerPost => "profiles/{}/pages/{}/trigger_posts",

    PageShares => "profiles/{}/pages/{}/shared_page",

    PageDynamicAttributes => "profiles/{}/pages/{}/dynamic_attributes",
    PageDynamicAttribute => "profiles/{}/pages/{}/dynamic_attributes/{}",

    PageGroups => "profiles/{}/page_groups",
    PageGroup => "profiles/{}/page_groups/{}",

    PageGroupPageAssignments => "profiles/{}/page_groups/{}/pages",
    PageGroupPageAssignment => "profiles/{}/page_groups/{}/pages/{}",

    PageGroupUserAssignments => "profiles/{}/page_groups/{}/assignments",
    PageGroupUserAssignment => "profiles/{}/page_groups/{}/assignments/{}",

    Elements => "profiles/{}/pages/{}/elements",
    Element => "profiles/{}/pages/{}/elements/{}",

    ElementLocalizations => "profiles/{}/pages/{}/elements/{}/localizations",
    ElementLocalization => "profiles/{}/pages/{}/elements/{}/localizations/{}",

    ElementDynamicAttributes => "profiles/{}/pages/{}/elements/{}/dynamic_attributes",
    ElementDynamicAttribute => "profiles/{}/pages/{}/elements/{}/dynamic_attributes/{}",

    OptionLists => "profiles/{}/optionlists",
    OptionList => "profiles/{}/optionlists/{}",

    Options => "profiles/{}/optionlists/{}/options",
    Option => "profiles/{}/optionlists/{}/options/{}",

    OptionLocalizations => "profiles/{}/optionlists/{}/options/{}/localizations",
    OptionLocalization => "profiles/{}/optionlists/{}/options/{}/localizations/{}",

    Records => "profiles/{}/pages/{}/records",
    Record => "profiles/{}/pages/{}/records/{}",

    RecordAssignments => "profiles/{}/pages/{}/records/{}/assignments",
    RecordAssignment => "profiles/{}/pages/{}/records/{}/assignments/{}",

    Notifications => "profiles/{}/notifications",

    PrivateMedia => "profiles/{}/media",

    DeviceLicenses => "profiles/{}/licenses",
    DeviceLicense => "profiles/{}/licenses/{}",
}

impl Resource {
    /// Looks up a resource by its name (e.g. `"UserPageAssignment"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Number of positional placeholders in the template.
    pub fn arity(&self) -> usize {
        self.template().matches("{}").count()
    }

    /// Renders the path by substituting `ids` into the placeholders in order.
    ///
    /// An empty `ids` slice leaves the template untouched.
    pub fn render(&self, ids: &[PathParam<'_>]) -> Result<String, ClientError> {
        let template = self.template();
        if ids.is_empty() {
            return Ok(template.to_string());
        }

        let expected = self.arity();
        if ids.len() != expected {
            return Err(ClientError::PathParameters {
                resource: self.name(),
                expected,
                given: ids.len(),
            });
        }

        let mut path = String::with_capacity(template.len() + ids.len() * 8);
        let mut segments = template.split("{}");
        if let Some(first) = segments.next() {
            path.push_str(first);
        }
        for (id, segment) in ids.iter().zip(segments) {
            path.push_str(&id.to_string());
            path.push_str(segment);
        }

        Ok(path)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (verb, resource) pair identifying one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub verb: Verb,
    pub resource: Resource,
}

impl Operation {
    /// Creates a new Operation.
    pub fn new(verb: Verb, resource: Resource) -> Self {
        Self { verb, resource }
    }
}

impl FromStr for Operation {
    type Err = ClientError;

    /// Splits a camelCase operation name into its leading lowercase verb and
    /// the capitalized resource name, e.g. `getUsers` -> (`get`, `Users`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let unknown = || ClientError::UnknownOperation(name.to_string());

        let split = name.find(|c: char| c.is_ascii_uppercase()).ok_or_else(unknown)?;
        let (verb, resource) = name.split_at(split);

        let verb = verb.parse::<Verb>().map_err(|_| unknown())?;
        let resource = Resource::from_name(resource).ok_or_else(unknown)?;

        Ok(Self { verb, resource })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.verb.as_str().to_ascii_lowercase(), self.resource.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operation() {
        let op: Operation = "getUsers".parse().unwrap();
        assert_eq!(op, Operation::new(Verb::Get, Resource::Users));

        let op: Operation = "getUserPageAssignment".parse().unwrap();
        assert_eq!(op, Operation::new(Verb::Get, Resource::UserPageAssignment));

        let op: Operation = "copyOptionList".parse().unwrap();
        assert_eq!(op, Operation::new(Verb::Copy, Resource::OptionList));
    }

    #[test]
    fn test_parse_operation_unknown() {
        assert!("patchUsers".parse::<Operation>().is_err());
        assert!("getWidgets".parse::<Operation>().is_err());
        assert!("users".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_display_round_trips_name() {
        let op = Operation::new(Verb::Delete, Resource::ElementDynamicAttribute);
        assert_eq!(op.to_string(), "deleteElementDynamicAttribute");
    }

    #[test]
    fn test_render() {
        let path = Resource::UserPageAssignment.render(&[&1, &2, &3]).unwrap();
        assert_eq!(path, "profiles/1/users/2/page_assignments/3");

        let path = Resource::PageLocalization.render(&[&10, &20, &"es"]).unwrap();
        assert_eq!(path, "profiles/10/pages/20/localizations/es");
    }

    #[test]
    fn test_render_without_ids_keeps_template() {
        assert_eq!(Resource::Profiles.render(&[]).unwrap(), "profiles");
        assert_eq!(Resource::HomeProfile.render(&[]).unwrap(), "profiles/self");
    }

    #[test]
    fn test_render_arity_mismatch() {
        let err = Resource::User.render(&[&1]).unwrap_err();
        assert!(matches!(
            err,
            ClientError::PathParameters {
                expected: 2,
                given: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_routing_table() {
        assert_eq!(Resource::ALL.len(), 58);
        assert_eq!(Resource::from_name("PageEndpoints"), Some(Resource::PageEndpoints));
        assert_eq!(Resource::PageEndpoints.template(), "profiles/{}/pages/{}/http_callbacks");
        assert_eq!(Resource::OptionLocalization.arity(), 4);
        assert_eq!(Resource::HomeProfile.arity(), 0);
    }

    #[test]
    fn test_copy_method() {
        assert_eq!(Verb::Copy.method().as_str(), "COPY");
        assert_eq!(Verb::Delete.method(), reqwest::Method::DELETE);
    }
}
