diesel::table! {
    categories (id) {
        id -> Integer,
        #[sql_name = "type"]
        type_ -> Text,
    }
}

diesel::table! {
    drinks (id) {
        id -> Integer,
        title -> Text,
        recipe -> Text,
    }
}

diesel::table! {
    questions (id) {
        id -> Integer,
        question -> Text,
        answer -> Text,
        category -> Integer,
        difficulty -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(categories, drinks, questions,);
