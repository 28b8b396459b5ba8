mod credential_validator;
