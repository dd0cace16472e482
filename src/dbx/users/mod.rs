use crate::dbx::{client::ApiClient, ApiResult, Client};

const GET_CURRENT_ACCOUNT_URL: &str = "https://api.dropboxapi.com/2/users/get_current_account";

#[derive(Debug, PartialEq, serde::Deserialize)]
pub struct Name {
    pub given_name: String,
    pub surname: String,
    pub familiar_name: String,
    pub display_name: String,
    #[serde(default)]
    pub abbreviated_name: Option<String>,
}

#[derive(Debug, PartialEq, serde::Deserialize)]
pub struct FullAccount {
    pub account_id: String,
    pub name: Name,
    pub email: String,
    pub email_verified: bool,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub referral_link: Option<String>,
}

/// Endpoint client for the `/2/users` namespace.
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    pub fn new(client: Client, access_token: &str) -> Self {
        Self {
            api: ApiClient::new(client, access_token),
        }
    }

    pub async fn get_current_account(&self) -> ApiResult<FullAccount> {
        self.api
            .post_rpc(GET_CURRENT_ACCOUNT_URL, &serde_json::Value::Null)
            .await
    }
}

/// The fixed account block printed by the `info` command.
pub fn render_account(account: &FullAccount) -> String {
    const RULE: &str =
        "--------------------------------------------------------------------------";
    format!(
        "\n{rule}\n\
         User ID:       {account_id}\n\
         Display Name:  {display_name}\n\
         Name:          {given_name} {surname} ({familiar_name})\n\
         E-mail:        {email} ({verified})\n\
         Country:       {country}\n\
         Referral link: {referral_link}\n\
         {rule}",
        rule = RULE,
        account_id = account.account_id,
        display_name = account.name.display_name,
        given_name = account.name.given_name,
        surname = account.name.surname,
        familiar_name = account.name.familiar_name,
        email = account.email,
        verified = if account.email_verified { "verified" } else { "" },
        country = account.country.as_deref().unwrap_or_default(),
        referral_link = account.referral_link.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::{render_account, FullAccount, Name};

    fn account() -> FullAccount {
        FullAccount {
            account_id: "1234567891234567891234567891234567891234".to_owned(),
            name: Name {
                given_name: "Prasad".to_owned(),
                surname: "Vakapalli".to_owned(),
                familiar_name: "Prasad".to_owned(),
                display_name: "Prasad Vakapalli".to_owned(),
                abbreviated_name: Some("PV".to_owned()),
            },
            email: "test@gmail.com".to_owned(),
            email_verified: true,
            country: Some("SE".to_owned()),
            referral_link: Some("https://testling/xyz".to_owned()),
        }
    }

    #[test]
    fn test_render_account_display_name_gutter() {
        let rendered = render_account(&account());
        assert!(
            rendered.contains("Display Name:  Prasad Vakapalli"),
            "unexpected account block:\n{}",
            rendered
        );
    }

    #[test]
    fn test_render_account_block() {
        let rendered = render_account(&account());
        assert!(rendered.contains("User ID:       1234567891234567891234567891234567891234"));
        assert!(rendered.contains("Name:          Prasad Vakapalli (Prasad)"));
        assert!(rendered.contains("E-mail:        test@gmail.com (verified)"));
        assert!(rendered.contains("Country:       SE"));
        assert!(rendered.contains("Referral link: https://testling/xyz"));
    }

    #[test]
    fn test_render_account_unverified_email() {
        let mut account = account();
        account.email_verified = false;
        assert!(render_account(&account).contains("E-mail:        test@gmail.com ()"));
    }

    #[test]
    fn test_full_account_from_json() {
        let raw = r#"{
            "account_id": "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc",
            "name": {
                "given_name": "Franz",
                "surname": "Ferdinand",
                "familiar_name": "Franz",
                "display_name": "Franz Ferdinand (Personal)",
                "abbreviated_name": "FF"
            },
            "email": "franz@dropbox.com",
            "email_verified": true,
            "disabled": false,
            "country": "US",
            "locale": "en",
            "referral_link": "https://db.tt/ZITNuhtI",
            "is_paired": true,
            "account_type": {".tag": "business"}
        }"#;

        let actual: FullAccount = serde_json::from_str(raw).unwrap();
        assert_eq!("dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc", actual.account_id);
        assert_eq!("Franz Ferdinand (Personal)", actual.name.display_name);
        assert_eq!(Some("US"), actual.country.as_deref());
        assert!(actual.email_verified);
    }
}
