//! Ready-made interfaces covering every supported construct.

/// A named sample source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name:   &'static str,
    pub source: &'static str,
}

pub const USER: Sample = Sample {
    name:   "User",
    source: "interface User {
\tname: string;
\tage: number;
\tactive: boolean;
}
",
};

pub const BLOG_POST: Sample = Sample {
    name:   "BlogPost",
    source: "interface BlogPost {
\tid: string;
\ttitle: string;
\tpublished: boolean;
\tpublishedAt?: string;
\tauthor: {
\t\tname: string;
\t\tavatarUrl?: string;
\t\tsocial?: {
\t\t\tgithub?: string;
\t\t\twebsite?: string;
\t\t};
\t};
\ttags: string[];
\tformat: \"markdown\" | \"html\";
\tcomments?: {
\t\tuser: string;
\t\tmessage: string;
\t\treplies?: {
\t\t\tuser: string;
\t\t\tmessage: string;
\t\t}[];
\t}[];
}
",
};

pub const ORDER: Sample = Sample {
    name:   "Order",
    source: "type Order = {
\torderId: string;
\tstatus: \"pending\" | \"shipped\" | \"delivered\";
\tcustomer: {
\t\tname: string;
\t\temail: string;
\t\tloyaltyPoints?: number;
\t};
\titems: {
\t\tsku: string;
\t\tquantity: number;
\t\tprice: number;
\t}[];
\tcouponCodes?: string[];
\tgift: boolean;
}
",
};

pub const SUBSCRIPTION: Sample = Sample {
    name:   "Subscription",
    source: "interface Subscription {
\tcustomerId: string;
\tplan: \"free\" | \"pro\" | \"team\";
\ttrialEndsAt?: string;
\tbilling: {
\t\tcurrency: string;
\t\tpaymentMethod: {
\t\t\tlast4?: string;
\t\t\tbrand?: string;
\t\t};
\t};
\tusage?: {
\t\tapiCalls: number;
\t\tseats: number;
\t\tintegrationsEnabled: string[];
\t};
}
",
};

pub const ALL: [Sample; 4] = [USER, BLOG_POST, ORDER, SUBSCRIPTION];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<Sample> {
    ALL.iter().copied().find(|sample| sample.name.eq_ignore_ascii_case(name))
}
